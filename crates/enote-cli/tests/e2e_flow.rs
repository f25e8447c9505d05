//! End-to-end tests driving the `enote` binary.
//!
//! Each test points `HOME` at a temp dir so the first command bootstraps a
//! fresh workspace under it.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn enote_binary() -> String {
    env!("CARGO_BIN_EXE_enote").to_string()
}

fn enote(home: &Path, args: &[&str]) -> Output {
    Command::new(enote_binary())
        .env("HOME", home)
        // Parsed by figment as a bool; still has to load as the editor `true`.
        .env("ENOTE_EDITOR", "true")
        .env_remove("ENOTE_WORKINGDIR")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run enote")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Runs a command and asserts it succeeded.
fn enote_ok(home: &Path, args: &[&str]) -> String {
    let output = enote(home, args);
    assert!(
        output.status.success(),
        "enote {args:?} should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    stdout(&output)
}

/// First run initializes the workspace layout.
#[test]
fn test_first_run_bootstraps_workspace() {
    let temp = TempDir::new().unwrap();

    let out = enote_ok(temp.path(), &["edit"]);
    assert!(out.contains("not found, initializing enote"), "{out}");

    let workingdir = temp.path().join(".enote");
    assert!(temp.path().join(".enote.toml").exists());
    assert!(workingdir.join("daily").is_dir());
    assert_eq!(
        fs::read_to_string(workingdir.join("timelog.txt")).unwrap(),
        "{}"
    );
    let template = fs::read_to_string(workingdir.join("template.md")).unwrap();
    assert!(template.contains("## ToDo"));
    assert!(template.contains("## Notes"));
    assert!(template.contains("## Summary"));

    // Second run finds the config and stays quiet.
    let out = enote_ok(temp.path(), &["edit"]);
    assert!(!out.contains("initializing"), "{out}");
}

/// No command and unknown commands print usage with success.
#[test]
fn test_usage_on_missing_or_unknown_command() {
    let temp = TempDir::new().unwrap();

    for args in [&[][..], &["frobnicate"][..]] {
        let out = enote_ok(temp.path(), args);
        assert!(out.contains("Usage"), "{out}");
        for command in ["backup", "start", "end", "log", "daily", "edit", "standup", "grep"] {
            assert!(out.contains(command), "usage should list {command}: {out}");
        }
    }
}

/// Flags placed after a subcommand fail instead of recording anything.
#[test]
fn test_misplaced_flags_are_rejected() {
    let temp = TempDir::new().unwrap();
    enote_ok(temp.path(), &["edit"]);
    let log_path = temp.path().join(".enote/timelog.txt");

    for args in [&["start", "-v"][..], &["end", "--fixed", "bug"][..]] {
        let output = enote(temp.path(), args);
        assert_eq!(output.status.code(), Some(2), "enote {args:?}");
        assert!(stdout(&output).is_empty(), "enote {args:?}");
    }
    assert_eq!(fs::read_to_string(&log_path).unwrap(), "{}");
}

/// Start, end and log against a seeded day, and the self-healing start.
#[test]
fn test_start_end_log_flow() {
    let temp = TempDir::new().unwrap();
    enote_ok(temp.path(), &["edit"]);
    let log_path = temp.path().join(".enote/timelog.txt");

    fs::write(
        &log_path,
        r#"{"2022-05-01": ["S08:00", "E12:00", "S13:00", "E17:00"], "2022-05-02": ["S08:00", "E12:00", "S13:00"]}"#,
    )
    .unwrap();
    assert_eq!(enote_ok(temp.path(), &["log", "2022-05-01"]), "8:00:00\n");
    assert_eq!(enote_ok(temp.path(), &["log", "2022-05-02"]), "4:00:00\n");

    enote_ok(temp.path(), &["start"]);
    enote_ok(temp.path(), &["start"]);
    enote_ok(temp.path(), &["end", "wrapped", "up"]);

    let log: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&log_path).unwrap()).unwrap();
    let days = log.as_object().unwrap();
    assert_eq!(days.len(), 3, "{log}");
    assert_eq!(
        days["2022-05-01"],
        serde_json::json!(["S08:00", "E12:00", "S13:00", "E17:00"])
    );

    let today = days
        .iter()
        .find(|(date, _)| !date.starts_with("2022-05-0"))
        .map(|(_, markers)| markers.as_array().unwrap().clone())
        .unwrap();
    let today: Vec<&str> = today.iter().map(|m| m.as_str().unwrap()).collect();
    assert_eq!(today.len(), 4, "{today:?}");
    assert!(today[0].starts_with('S'));
    assert_eq!(today[1], "E");
    assert!(today[2].starts_with('S'));
    assert!(today[3].starts_with('E') && today[3].ends_with(" wrapped up"));

    let out = enote_ok(temp.path(), &["log"]);
    assert!(out.trim_end().contains(':'), "{out}");
}

/// `log` for a day that was never recorded fails with a diagnostic.
#[test]
fn test_log_missing_date_fails() {
    let temp = TempDir::new().unwrap();
    enote_ok(temp.path(), &["edit"]);

    let output = enote(temp.path(), &["log", "1999-01-01"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no entries logged for 1999-01-01"), "{stderr}");
}

/// `daily` seeds today's note, `standup` prints a summary.
#[test]
fn test_daily_and_standup() {
    let temp = TempDir::new().unwrap();
    enote_ok(temp.path(), &["daily"]);

    let daily_dir = temp.path().join(".enote/daily");
    let notes: Vec<_> = fs::read_dir(&daily_dir).unwrap().collect();
    assert_eq!(notes.len(), 1);
    let note = fs::read_to_string(notes[0].as_ref().unwrap().path()).unwrap();
    assert!(note.starts_with("# "));
    assert!(note.contains("## Summary"));

    fs::write(
        daily_dir.join("2022-05-01.md"),
        "# 2022-05-01\n## Notes\nscratch\n## Summary\nshipped it\n",
    )
    .unwrap();
    assert_eq!(enote_ok(temp.path(), &["standup", "2022-05-01"]), "shipped it\n");

    let out = enote_ok(temp.path(), &["daily", "1999-01-01"]);
    assert!(out.contains("No daily note from 1999-01-01 exist!"), "{out}");
}
