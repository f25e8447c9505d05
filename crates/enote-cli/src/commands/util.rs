//! Shared utilities for CLI commands.

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, ExitStatus, Output};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use enote_core::Clock;

/// Parse a day argument, defaulting to `default` when absent.
///
/// Supports:
/// - ISO 8601 dates: "2022-05-01"
/// - "today" and "yesterday", relative to `clock`
pub fn parse_day(arg: Option<&str>, clock: &impl Clock, default: NaiveDate) -> Result<NaiveDate> {
    let Some(s) = arg.map(str::trim) else {
        return Ok(default);
    };

    match s.to_ascii_lowercase().as_str() {
        "today" => return Ok(clock.today()),
        "yesterday" => return Ok(clock.yesterday()),
        _ => {}
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| {
        format!("Invalid date: {s}. Use YYYY-MM-DD (e.g., 2022-05-01), 'today' or 'yesterday'")
    })
}

/// Builds a command from an editor setting such as `"code --wait"`.
pub fn editor_command(editor: &str) -> Result<Command> {
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .context("no editor configured; set `editor` in the config file or ENOTE_EDITOR")?;
    let mut command = Command::new(program);
    command.args(parts);
    Ok(command)
}

/// Opens `path` in the configured editor and waits for it to exit.
pub fn open_in_editor(editor: &str, path: &Path) -> Result<()> {
    let mut command = editor_command(editor)?;
    command.arg(path);
    run_status(&mut command)?;
    Ok(())
}

/// Runs a command with inherited stdio and waits for it.
///
/// A non-zero exit is logged, not returned as an error.
pub fn run_status(command: &mut Command) -> Result<ExitStatus> {
    let program = program_name(command);
    tracing::debug!(?command, "running");
    let status = command
        .status()
        .with_context(|| format!("failed to run {program}"))?;
    if !status.success() {
        tracing::warn!(%program, %status, "command exited unsuccessfully");
    }
    Ok(status)
}

/// Runs a command capturing its output.
///
/// A non-zero exit is logged, not returned as an error.
pub fn run_output(command: &mut Command) -> Result<Output> {
    let program = program_name(command);
    tracing::debug!(?command, "running");
    let output = command
        .output()
        .with_context(|| format!("failed to run {program}"))?;
    if !output.status.success() {
        tracing::warn!(%program, status = %output.status, "command exited unsuccessfully");
    }
    Ok(output)
}

fn program_name(command: &Command) -> String {
    command.get_program().to_string_lossy().into_owned()
}

/// Returns whether `program` can be spawned.
pub fn is_available(program: impl AsRef<OsStr>) -> bool {
    Command::new(program)
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}
