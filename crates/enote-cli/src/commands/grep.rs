//! Grep command for searching all notes.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result};

use crate::Config;
use crate::commands::util::run_output;

/// Runs `grep <args>` over every daily note and the fixed note, relaying its
/// output.
///
/// grep exits non-zero when nothing matches, so its status is not an error.
pub fn run<W: Write>(writer: &mut W, config: &Config, args: &[String]) -> Result<()> {
    let mut command = Command::new("grep");
    command
        .args(args)
        .args(note_files(config)?)
        .arg(config.fixed_path());

    let output = run_output(&mut command)?;
    writer.write_all(&output.stdout)?;
    std::io::stderr().write_all(&output.stderr)?;
    Ok(())
}

/// Daily note paths, sorted by name.
fn note_files(config: &Config) -> Result<Vec<PathBuf>> {
    let dir = config.daily_dir();
    let mut files = fs::read_dir(&dir)
        .with_context(|| format!("failed to list {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to list {}", dir.display()))?;
    files.sort();
    Ok(files)
}
