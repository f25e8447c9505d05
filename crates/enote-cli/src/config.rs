//! Configuration loading and management.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use enote_core::note::daily_note_file_name;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Deserializer, Serialize};

/// Name of the per-user config file in the home directory.
pub const CONFIG_FILE_NAME: &str = ".enote.toml";

/// Application configuration.
///
/// `timelog`, `template`, `fixed` and `daily` are resolved against
/// `workingdir` when relative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the log and notes; also the git repository.
    pub workingdir: PathBuf,
    /// Event log file.
    pub timelog: PathBuf,
    /// Template copied into each new daily note.
    pub template: PathBuf,
    /// The fixed note.
    pub fixed: PathBuf,
    /// Directory of daily notes.
    pub daily: PathBuf,
    /// Editor command, optionally with arguments.
    #[serde(deserialize_with = "scalar_string")]
    pub editor: String,
}

impl Default for Config {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            workingdir: home.join(".enote"),
            timelog: PathBuf::from("timelog.txt"),
            template: PathBuf::from("template.md"),
            fixed: PathBuf::from("notes.md"),
            daily: PathBuf::from("daily"),
            editor: default_editor(),
        }
    }
}

impl Config {
    /// Loads configuration layered as defaults, then `path`, then `ENOTE_*`
    /// environment variables.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(path: &Path) -> Result<Self, figment::Error> {
        Self::figment(path).extract()
    }

    pub(crate) fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("ENOTE_"))
    }

    /// Writes this configuration as TOML to `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self).context("failed to serialize configuration")?;
        std::fs::write(path, toml)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.workingdir.join(path)
    }

    pub fn timelog_path(&self) -> PathBuf {
        self.resolve(&self.timelog)
    }

    pub fn template_path(&self) -> PathBuf {
        self.resolve(&self.template)
    }

    pub fn fixed_path(&self) -> PathBuf {
        self.resolve(&self.fixed)
    }

    pub fn daily_dir(&self) -> PathBuf {
        self.resolve(&self.daily)
    }

    /// Path of the daily note for `date`.
    pub fn daily_note_path(&self, date: NaiveDate) -> PathBuf {
        self.daily_dir().join(daily_note_file_name(date))
    }
}

/// Returns the default config file location, `~/.enote.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

/// `$VISUAL`, then `$EDITOR`, then `vi`.
fn default_editor() -> String {
    ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "vi".to_string())
}

/// Reads any scalar as a string. The env provider turns `ENOTE_EDITOR=true`
/// into a bool and `ENOTE_EDITOR=42` into an integer.
fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Str(String),
        Bool(bool),
        Int(i64),
        Float(f64),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Str(s) => s,
        Scalar::Bool(b) => b.to_string(),
        Scalar::Int(i) => i.to_string(),
        Scalar::Float(f) => f.to_string(),
    })
}
