//! Backup command for committing notes and the time log to git.

use std::process::Command;

use anyhow::Result;
use enote_core::Clock;

use crate::Config;
use crate::commands::util::run_status;

/// Stages the daily notes, fixed note and time log, then commits them with
/// the current time as the message.
pub fn run(config: &Config, clock: &impl Clock) -> Result<()> {
    let mut add = Command::new("git");
    add.current_dir(&config.workingdir)
        .arg("add")
        .arg(config.daily_dir())
        .arg(config.fixed_path())
        .arg(config.timelog_path());
    run_status(&mut add)?;

    let mut commit = Command::new("git");
    commit
        .current_dir(&config.workingdir)
        .arg("commit")
        .arg("-m")
        .arg(commit_message(clock));
    run_status(&mut commit)?;

    Ok(())
}

fn commit_message(clock: &impl Clock) -> String {
    clock.now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use chrono::{NaiveDate, NaiveTime};
    use enote_core::FixedClock;

    use crate::commands::util::is_available;
    use crate::workspace;

    fn clock() -> FixedClock {
        FixedClock::at(
            NaiveDate::from_ymd_opt(2022, 5, 2).unwrap(),
            NaiveTime::from_hms_opt(17, 5, 9).unwrap(),
        )
    }

    #[test]
    fn message_is_iso_timestamp() {
        assert_eq!(commit_message(&clock()), "2022-05-02T17:05:09");
    }

    #[test]
    fn commits_tracked_files() {
        if !is_available("git") {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            workingdir: dir.path().join("ws"),
            ..Config::default()
        };
        workspace::initialize(&config, &dir.path().join(".enote.toml")).unwrap();
        fs::write(config.daily_note_path(clock().today()), "# 2022-05-02\n").unwrap();

        let git = |args: &[&str]| {
            Command::new("git")
                .current_dir(&config.workingdir)
                .args(args)
                .output()
                .unwrap()
        };
        git(&["config", "user.email", "test@example.com"]);
        git(&["config", "user.name", "Test"]);

        run(&config, &clock()).unwrap();

        let log = git(&["log", "--format=%s", "--name-only"]);
        let log = String::from_utf8(log.stdout).unwrap();
        assert!(log.contains("2022-05-02T17:05:09"), "{log}");
        assert!(log.contains("daily/2022-05-02.md"), "{log}");
        assert!(log.contains("timelog.txt"), "{log}");
        assert!(log.contains("notes.md"), "{log}");
    }
}
