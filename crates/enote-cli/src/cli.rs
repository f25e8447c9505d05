//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Log working hours and manage simple notes.
///
/// Time is recorded as start/end markers per day in a JSON log; notes are
/// plain markdown files kept in a git repository.
#[derive(Debug, Parser)]
#[command(name = "enote", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file (default: ~/.enote.toml).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a git commit with notes and timelog.
    Backup,

    /// Start logging time.
    Start,

    /// Stop logging time.
    End {
        /// Optional note stored with the end marker.
        #[arg(trailing_var_arg = true)]
        annotation: Vec<String>,
    },

    /// Print time worked today.
    Log {
        /// Day to report (YYYY-MM-DD, today, yesterday).
        date: Option<String>,
    },

    /// Edit notes for today.
    Daily {
        /// Open the note of an earlier day instead (YYYY-MM-DD, yesterday).
        date: Option<String>,
    },

    /// Edit static note.
    Edit,

    /// Print summary for yesterday's note.
    Standup {
        /// Day whose summary to print (YYYY-MM-DD, today, yesterday).
        date: Option<String>,
    },

    /// Grep notes.
    #[command(disable_help_flag = true)]
    Grep {
        /// Arguments passed to grep, flags included.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

impl Commands {
    /// Annotation text for `end`, if any words were given.
    pub fn annotation(words: &[String]) -> Option<String> {
        let text = words.join(" ");
        (!text.trim().is_empty()).then_some(text)
    }
}
