use std::io;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use enote_cli::commands::{backup, daily, edit, grep, log, record, standup};
use enote_cli::{Cli, Commands, default_config_path, workspace};
use enote_core::SystemClock;

/// Prints usage and the command list to stdout.
fn print_usage() -> Result<()> {
    Cli::command().print_help()?;
    println!();
    Ok(())
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Unknown commands get the usage text, not a hard error.
        Err(e) if e.kind() == ErrorKind::InvalidSubcommand => return print_usage(),
        Err(e) => e.exit(),
    };

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let Some(command) = cli.command else {
        return print_usage();
    };

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path().context("could not determine home directory")?,
    };
    let config = workspace::load_or_init(&config_path)?;
    let clock = SystemClock;
    let mut stdout = io::stdout().lock();

    match command {
        Commands::Backup => backup::run(&config, &clock)?,
        Commands::Start => record::start(&mut stdout, &config, &clock)?,
        Commands::End { annotation } => {
            let annotation = Commands::annotation(&annotation);
            record::end(&mut stdout, &config, &clock, annotation.as_deref())?;
        }
        Commands::Log { date } => log::run(&mut stdout, &config, &clock, date.as_deref())?,
        Commands::Daily { date } => daily::run(&mut stdout, &config, &clock, date.as_deref())?,
        Commands::Edit => edit::run(&config)?,
        Commands::Standup { date } => {
            standup::run(&mut stdout, &config, &clock, date.as_deref())?;
        }
        Commands::Grep { args } => grep::run(&mut stdout, &config, &args)?,
    }

    Ok(())
}
