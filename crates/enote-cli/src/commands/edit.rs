//! Edit command for the fixed note.

use anyhow::Result;

use crate::Config;
use crate::commands::util::open_in_editor;

pub fn run(config: &Config) -> Result<()> {
    open_in_editor(&config.editor, &config.fixed_path())
}
