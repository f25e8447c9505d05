//! Daily command for editing the note of a day.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use enote_core::Clock;
use enote_core::note::seed_daily_note;

use crate::Config;
use crate::commands::util::{open_in_editor, parse_day};

/// Opens a daily note in the editor.
///
/// Without a date, today's note is created from the template if needed. With
/// a date, the note is opened as-is; a missing note is reported but the
/// editor still starts.
pub fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    clock: &impl Clock,
    date: Option<&str>,
) -> Result<()> {
    let path = prepare(writer, config, clock, date)?;
    open_in_editor(&config.editor, &path)
}

/// Resolves the note path, seeding today's note when it does not exist.
pub(crate) fn prepare<W: Write>(
    writer: &mut W,
    config: &Config,
    clock: &impl Clock,
    date: Option<&str>,
) -> Result<PathBuf> {
    if date.is_some() {
        let date = parse_day(date, clock, clock.today())?;
        let path = config.daily_note_path(date);
        if !path.exists() {
            writeln!(writer, "No daily note from {date} exist!")?;
        }
        return Ok(path);
    }

    let today = clock.today();
    let path = config.daily_note_path(today);
    if !path.exists() {
        let template = fs::read_to_string(config.template_path()).with_context(|| {
            format!("failed to read template {}", config.template_path().display())
        })?;
        fs::create_dir_all(config.daily_dir()).context("failed to create daily notes directory")?;
        fs::write(&path, seed_daily_note(today, &template))
            .with_context(|| format!("failed to create {}", path.display()))?;
        tracing::debug!(path = %path.display(), "created daily note");
    }
    Ok(path)
}
