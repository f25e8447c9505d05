//! Source of the current local date and time.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Provides "now" to every operation that needs it, so tests can pin it.
pub trait Clock {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    fn time(&self) -> NaiveTime {
        self.now().time()
    }

    fn yesterday(&self) -> NaiveDate {
        self.today() - TimeDelta::days(1)
    }
}

/// Reads the system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Pins the clock at `date` and `time`.
    pub fn at(date: NaiveDate, time: NaiveTime) -> Self {
        Self(NaiveDateTime::new(date, time))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
