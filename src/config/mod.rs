//! Configuration module for Splitbook
//!
//! - Base directory resolution (env override, platform config dir)
//! - User settings loaded from `config.json`

pub mod paths;
pub mod settings;

pub use paths::SplitbookPaths;
pub use settings::Settings;
