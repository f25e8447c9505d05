//! enote CLI library.
//!
//! This crate provides the CLI interface: argument parsing, configuration,
//! workspace bootstrap and the subcommands.

mod cli;
pub mod commands;
mod config;
pub mod workspace;

pub use cli::{Cli, Commands};
pub use config::{CONFIG_FILE_NAME, Config, default_config_path};
