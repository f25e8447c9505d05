//! Worked-time accounting over one day's markers.
//!
//! Pairing is positional: entries at even indices are treated as starts and
//! entries at odd indices as the ends that follow them, whatever their tags
//! say. A trailing unmatched entry (an open session) contributes nothing, and
//! a pair with an empty time on either side is skipped. An end earlier than
//! its start yields a negative contribution that is summed unmodified.

use chrono::TimeDelta;

use crate::marker::{Marker, MarkerError};

/// A matched start/end pair with both times present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: chrono::NaiveTime,
    pub end: chrono::NaiveTime,
}

impl Interval {
    /// Same-day difference, negative when `end` precedes `start`.
    pub fn elapsed(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Derives the intervals of a day by zipping even and odd positions.
pub fn intervals(markers: &[Marker]) -> Result<Vec<Interval>, MarkerError> {
    let starts = markers.iter().step_by(2);
    let ends = markers.iter().skip(1).step_by(2);

    let mut intervals = Vec::new();
    for (start, end) in starts.zip(ends) {
        if start.time_token().is_empty() || end.time_token().is_empty() {
            tracing::debug!(%start, %end, "skipping pair with a placeholder marker");
            continue;
        }
        let (Some(start), Some(end)) = (start.time()?, end.time()?) else {
            continue;
        };
        intervals.push(Interval { start, end });
    }
    Ok(intervals)
}

/// Total worked time for a day.
pub fn total_elapsed(markers: &[Marker]) -> Result<TimeDelta, MarkerError> {
    Ok(intervals(markers)?
        .iter()
        .map(Interval::elapsed)
        .fold(TimeDelta::zero(), |acc, d| acc + d))
}

/// Renders a duration as `H:MM:SS`, prefixed with `-` when negative.
pub fn format_elapsed(delta: TimeDelta) -> String {
    let sign = if delta < TimeDelta::zero() { "-" } else { "" };
    let secs = delta.num_seconds().unsigned_abs();
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{sign}{hours}:{minutes:02}:{seconds:02}")
}
