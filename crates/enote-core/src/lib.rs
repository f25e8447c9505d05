//! Core domain logic for enote.
//!
//! This crate contains the fundamental types and logic for:
//! - Markers: the start/end entries recorded per day
//! - Accounting: pairing markers and summing worked time
//! - Notes: daily note naming, seeding and summary extraction
//! - Clock: the injectable source of "now"

mod accountant;
pub mod clock;
pub mod marker;
pub mod note;

pub use accountant::{Interval, format_elapsed, intervals, total_elapsed};
pub use clock::{Clock, FixedClock, SystemClock};
pub use marker::{Marker, MarkerError, MarkerKind, parse_time_of_day};
