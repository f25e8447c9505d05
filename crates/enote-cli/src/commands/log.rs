//! Log command for printing time worked on a day.

use std::io::Write;

use anyhow::{Context, Result};
use enote_core::{Clock, format_elapsed, total_elapsed};
use enote_store::LogFile;

use crate::Config;
use crate::commands::util::parse_day;

/// Prints the total elapsed time for `date` (default: today).
pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    clock: &impl Clock,
    date: Option<&str>,
) -> Result<()> {
    let date = parse_day(date, clock, clock.today())?;
    let log = LogFile::new(config.timelog_path()).load()?;
    let markers = log.day(date)?;
    let total = total_elapsed(markers).with_context(|| format!("failed to total {date}"))?;

    tracing::debug!(%date, markers = markers.len(), "computed elapsed time");
    writeln!(writer, "{}", format_elapsed(total))?;
    Ok(())
}
