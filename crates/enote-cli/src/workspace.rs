//! Working directory bootstrap.
//!
//! The first run (no config file yet) writes the config file and lays out the
//! working directory: daily notes directory, an empty time log, the note
//! template, the fixed note, and a git repository.

use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use enote_core::note::DEFAULT_TEMPLATE;
use enote_store::LogFile;

use crate::Config;
use crate::commands::util;

/// Loads the configuration at `config_path`, initializing everything first if
/// the file does not exist yet.
pub fn load_or_init(config_path: &Path) -> Result<Config> {
    if config_path.exists() {
        let config = Config::load_from(config_path)
            .with_context(|| format!("failed to load {}", config_path.display()))?;
        tracing::debug!(?config, "loaded configuration");
        return Ok(config);
    }

    println!("{} not found, initializing enote", config_path.display());
    let config = Config::load_from(config_path).context("failed to build default configuration")?;
    initialize(&config, config_path)?;
    Ok(config)
}

/// Writes `config` to `config_path` and creates the working directory layout.
///
/// Files that already exist are left untouched.
pub fn initialize(config: &Config, config_path: &Path) -> Result<()> {
    tracing::info!(workingdir = %config.workingdir.display(), "initializing workspace");

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).context("failed to create config directory")?;
    }
    config.write_to(config_path)?;

    fs::create_dir_all(&config.workingdir).with_context(|| {
        format!(
            "failed to create working directory {}",
            config.workingdir.display()
        )
    })?;
    fs::create_dir_all(config.daily_dir()).context("failed to create daily notes directory")?;

    LogFile::new(config.timelog_path())
        .create_if_missing()
        .context("failed to create time log")?;
    write_if_missing(&config.template_path(), DEFAULT_TEMPLATE)?;
    write_if_missing(&config.fixed_path(), "")?;

    init_repository(&config.workingdir);
    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

/// Runs `git init` in `dir` unless it is already a repository.
///
/// Failures are logged, not returned.
fn init_repository(dir: &Path) {
    if dir.join(".git").exists() {
        return;
    }
    let mut command = Command::new("git");
    command.arg("init").current_dir(dir);
    if let Err(e) = util::run_output(&mut command) {
        tracing::warn!(error = %e, "could not initialize git repository");
    }
}
