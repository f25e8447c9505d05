//! Storage layer for enote.
//!
//! The event log is a single JSON object mapping ISO dates to the ordered
//! markers recorded on that day:
//!
//! ```json
//! {"2022-05-01": ["S08:00", "E12:00", "S13:00", "E17:00"]}
//! ```
//!
//! Every mutation reads the whole file, changes one day, and writes the whole
//! file back. There is no locking; the log is meant for one user running one
//! command at a time.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use enote_core::{Clock, Marker, MarkerKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Event log errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The log file exists but is not a date to marker-list mapping.
    #[error("corrupt time log {}: {source}", .path.display())]
    CorruptLog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The requested day has no entry in the log.
    #[error("no entries logged for {0}")]
    DateNotFound(NaiveDate),
    /// Reading or writing the log file failed.
    #[error("failed to access time log {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The in-memory log could not be encoded.
    #[error("failed to encode time log: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// All recorded markers, keyed by day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    days: BTreeMap<NaiveDate, Vec<Marker>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markers recorded on `date`, in insertion order.
    pub fn day(&self, date: NaiveDate) -> Result<&[Marker], StoreError> {
        self.days
            .get(&date)
            .map(Vec::as_slice)
            .ok_or(StoreError::DateNotFound(date))
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Appends a marker of `kind` at `time` to `date`.
    ///
    /// If the day already has entries and the last one is not tagged with the
    /// opposite kind, a bare opposite-kind placeholder is appended first, so
    /// `start` twice in a row yields `S.., E, S..`. Returns the markers added.
    pub fn record(
        &mut self,
        date: NaiveDate,
        kind: MarkerKind,
        time: NaiveTime,
        annotation: Option<&str>,
    ) -> Vec<Marker> {
        let day = self.days.entry(date).or_default();
        let mut added = Vec::with_capacity(2);

        let expected = kind.opposite();
        if day.last().is_some_and(|last| last.kind() != Some(expected)) {
            tracing::debug!(%date, %kind, "inserting missing {expected} marker");
            added.push(Marker::bare(expected));
        }
        added.push(Marker::at(kind, time, annotation));

        day.extend(added.iter().cloned());
        added
    }

    /// Replaces the markers of `date` wholesale.
    #[cfg(test)]
    pub fn set_day(&mut self, date: NaiveDate, markers: Vec<Marker>) {
        self.days.insert(date, markers);
    }
}

/// The event log file on disk.
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes an empty log (`{}`) unless the file already exists.
    ///
    /// Returns `true` if a file was created.
    pub fn create_if_missing(&self) -> Result<bool, StoreError> {
        if self.path.exists() {
            return Ok(false);
        }
        self.save(&EventLog::new())?;
        Ok(true)
    }

    /// Reads the whole log.
    pub fn load(&self) -> Result<EventLog, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let log: EventLog =
            serde_json::from_str(&content).map_err(|source| StoreError::CorruptLog {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), days = log.days.len(), "loaded time log");
        Ok(log)
    }

    /// Overwrites the log with `log`.
    ///
    /// The content goes to a sibling temp file first and is renamed into
    /// place, so a failed write leaves the previous log intact.
    pub fn save(&self, log: &EventLog) -> Result<(), StoreError> {
        let json = serde_json::to_string(log)?;
        let tmp = self.path.with_extension("tmp");

        fs::write(&tmp, json).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "saved time log");
        Ok(())
    }

    /// Records a marker for the clock's current day and minute.
    ///
    /// Loads the whole log, appends to today's sequence (see
    /// [`EventLog::record`]) and saves it back.
    pub fn record_marker(
        &self,
        kind: MarkerKind,
        clock: &impl Clock,
        annotation: Option<&str>,
    ) -> Result<Vec<Marker>, StoreError> {
        let mut log = self.load()?;
        let now = clock.now();
        let added = log.record(now.date(), kind, now.time(), annotation);
        self.save(&log)?;
        Ok(added)
    }
}
