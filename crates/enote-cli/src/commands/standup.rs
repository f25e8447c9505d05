//! Standup command for printing the summary of a daily note.

use std::fs;
use std::io::{ErrorKind, Write};

use anyhow::{Context, Result};
use enote_core::Clock;
use enote_core::note::summary_section;

use crate::Config;
use crate::commands::util::parse_day;

/// Prints the summary section of `date`'s note (default: yesterday).
pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    clock: &impl Clock,
    date: Option<&str>,
) -> Result<()> {
    let date = parse_day(date, clock, clock.yesterday())?;
    let path = config.daily_note_path(date);

    let note = match fs::read_to_string(&path) {
        Ok(note) => note,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            writeln!(writer, "No daily note from {date} exist!")?;
            return Ok(());
        }
        Err(e) => return Err(e).with_context(|| format!("failed to read {}", path.display())),
    };

    writeln!(writer, "{}", summary_section(&note))?;
    Ok(())
}
