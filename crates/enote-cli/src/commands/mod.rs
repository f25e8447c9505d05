//! CLI subcommand implementations.

pub mod backup;
pub mod daily;
pub mod edit;
pub mod grep;
pub mod log;
pub mod record;
pub mod standup;
pub mod util;
