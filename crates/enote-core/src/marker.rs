//! Clock markers as stored in the event log.
//!
//! A marker is a one-character kind tag followed by a time of day and, for
//! end markers, optional free text:
//!
//! - `S08:00` starts a session.
//! - `E12:00` or `E12:00 lunch` ends one.
//! - A bare `S` or `E` is a placeholder inserted to restore alternation.

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hour, optional minutes and seconds, optional am/pm suffix.
static TIME_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)(\d{1,2})(?::?(\d{2}))?(?::(\d{2}))?\s*([ap]\.?m\.?)?$").unwrap()
});

/// Errors raised while interpreting markers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkerError {
    /// A marker carried a non-empty time token that is not a time of day.
    #[error("unrecognized time {token:?} in marker {marker:?}")]
    TimeParse { marker: String, token: String },
}

/// Which side of a work session a marker records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Start,
    End,
}

impl MarkerKind {
    /// The tag character written to the log.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    /// The kind that must precede this one for the day to alternate.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }

    pub const fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::End => "end",
        };
        write!(f, "{s}")
    }
}

/// One raw entry of a day's sequence.
///
/// Stored verbatim so that whatever is in the log file survives a
/// read-modify-write unchanged, including entries this crate cannot parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Marker(String);

impl Marker {
    /// Start marker at the given minute.
    pub fn start(time: NaiveTime) -> Self {
        Self(format!("S{}", time.format("%H:%M")))
    }

    /// End marker at the given minute, with optional trailing text.
    pub fn end(time: NaiveTime, annotation: Option<&str>) -> Self {
        let mut raw = format!("E{}", time.format("%H:%M"));
        if let Some(text) = annotation.map(str::trim).filter(|t| !t.is_empty()) {
            raw.push(' ');
            raw.push_str(text);
        }
        Self(raw)
    }

    /// Marker of the given kind at the given minute.
    pub fn at(kind: MarkerKind, time: NaiveTime, annotation: Option<&str>) -> Self {
        match kind {
            MarkerKind::Start => Self::start(time),
            MarkerKind::End => Self::end(time, annotation),
        }
    }

    /// Tag-only placeholder with no time.
    pub fn bare(kind: MarkerKind) -> Self {
        Self(kind.tag().to_string())
    }

    /// Wraps an arbitrary raw log entry.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Kind named by the leading tag, if it is a known one.
    pub fn kind(&self) -> Option<MarkerKind> {
        self.0.chars().next().and_then(MarkerKind::from_tag)
    }

    /// Everything after the one-character tag.
    pub fn body(&self) -> &str {
        let mut chars = self.0.chars();
        chars.next();
        chars.as_str()
    }

    /// The time-of-day token, without any annotation. Empty for placeholders.
    pub fn time_token(&self) -> &str {
        split_body(self.body()).0
    }

    /// Free text following the time token, if any.
    #[cfg(test)]
    pub fn annotation(&self) -> Option<&str> {
        let rest = split_body(self.body()).1;
        (!rest.is_empty()).then_some(rest)
    }

    /// Parses the time token.
    ///
    /// Returns `Ok(None)` for an empty token so placeholders can be skipped.
    pub fn time(&self) -> Result<Option<NaiveTime>, MarkerError> {
        let token = self.time_token();
        if token.is_empty() {
            return Ok(None);
        }
        parse_time_of_day(token)
            .map(Some)
            .ok_or_else(|| MarkerError::TimeParse {
                marker: self.0.clone(),
                token: token.to_string(),
            })
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Marker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Splits a marker body into `(time token, annotation)`.
///
/// An `am`/`pm` word directly after the token belongs to the time.
fn split_body(body: &str) -> (&str, &str) {
    let body = body.trim_start();
    let Some(first_end) = body.find(char::is_whitespace) else {
        return (body, "");
    };

    let rest = body[first_end..].trim_start();
    let next_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let next = &rest[..next_len];
    if is_meridiem(next) {
        let token_end = body.len() - rest.len() + next_len;
        return (&body[..token_end], rest[next_len..].trim());
    }

    (&body[..first_end], rest.trim_end())
}

fn is_meridiem(word: &str) -> bool {
    let word: String = word.chars().filter(|c| *c != '.').collect();
    word.eq_ignore_ascii_case("am") || word.eq_ignore_ascii_case("pm")
}

/// Parses a human-written time of day.
///
/// Supports:
/// - 24-hour: "8:00", "08:00", "08:00:30", "0800"
/// - 12-hour: "8am", "8:30pm", "8:30 PM", "8:30 p.m."
pub fn parse_time_of_day(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M") {
        return Some(t);
    }
    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M:%S") {
        return Some(t);
    }

    let caps = TIME_TOKEN_RE.captures(s)?;
    let mut hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps.get(2).map_or(Some(0), |m| m.as_str().parse().ok())?;
    let second: u32 = caps.get(3).map_or(Some(0), |m| m.as_str().parse().ok())?;

    if let Some(meridiem) = caps.get(4) {
        if !(1..=12).contains(&hour) {
            return None;
        }
        let pm = meridiem.as_str().to_ascii_lowercase().starts_with('p');
        hour = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, true) => h + 12,
            (h, false) => h,
        };
    } else if caps.get(2).is_none() {
        // A lone number is too ambiguous to be a time.
        return None;
    }

    NaiveTime::from_hms_opt(hour, minute, second)
}
