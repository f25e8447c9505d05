//! Start and end commands for clocking in and out.

use std::io::Write;

use anyhow::{Context, Result};
use enote_core::{Clock, MarkerKind};
use enote_store::LogFile;

use crate::Config;

/// Records a start marker for now.
pub fn start<W: Write>(writer: &mut W, config: &Config, clock: &impl Clock) -> Result<()> {
    run(writer, config, clock, MarkerKind::Start, None)
}

/// Records an end marker for now, with optional annotation text.
pub fn end<W: Write>(
    writer: &mut W,
    config: &Config,
    clock: &impl Clock,
    annotation: Option<&str>,
) -> Result<()> {
    run(writer, config, clock, MarkerKind::End, annotation)
}

fn run<W: Write>(
    writer: &mut W,
    config: &Config,
    clock: &impl Clock,
    kind: MarkerKind,
    annotation: Option<&str>,
) -> Result<()> {
    let log = LogFile::new(config.timelog_path());
    let added = log
        .record_marker(kind, clock, annotation)
        .with_context(|| format!("failed to record {kind} marker"))?;

    if added.len() > 1 {
        writeln!(
            writer,
            "No {} since the last {kind}; inserted a placeholder.",
            kind.opposite()
        )?;
    }
    let time = clock.time().format("%H:%M");
    match kind {
        MarkerKind::Start => writeln!(writer, "Started at {time}")?,
        MarkerKind::End => writeln!(writer, "Ended at {time}")?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{NaiveDate, NaiveTime};
    use enote_core::FixedClock;
    use insta::assert_snapshot;

    fn clock(h: u32, m: u32) -> FixedClock {
        FixedClock::at(
            NaiveDate::from_ymd_opt(2022, 5, 1).unwrap(),
            NaiveTime::from_hms_opt(h, m, 0).unwrap(),
        )
    }

    fn setup() -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            workingdir: dir.path().to_path_buf(),
            editor: "true".to_string(),
            ..Config::default()
        };
        std::fs::write(config.timelog_path(), "{}").unwrap();
        (dir, config)
    }

    fn day(config: &Config) -> Vec<String> {
        LogFile::new(config.timelog_path())
            .load()
            .unwrap()
            .day(NaiveDate::from_ymd_opt(2022, 5, 1).unwrap())
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn start_then_end_alternates() {
        let (_dir, config) = setup();
        let mut out = Vec::new();

        start(&mut out, &config, &clock(8, 0)).unwrap();
        end(&mut out, &config, &clock(12, 30), Some("lunch")).unwrap();

        assert_eq!(day(&config), ["S08:00", "E12:30 lunch"]);
        assert_snapshot!(String::from_utf8(out).unwrap(), @r"
        Started at 08:00
        Ended at 12:30
        ");
    }

    #[test]
    fn double_start_reports_placeholder() {
        let (_dir, config) = setup();
        let mut out = Vec::new();

        start(&mut out, &config, &clock(8, 0)).unwrap();
        start(&mut out, &config, &clock(9, 0)).unwrap();

        assert_eq!(day(&config), ["S08:00", "E", "S09:00"]);
        assert_snapshot!(String::from_utf8(out).unwrap(), @r"
        Started at 08:00
        No end since the last start; inserted a placeholder.
        Started at 09:00
        ");
    }
}
