//! User settings for Splitbook
//!
//! Settings are read from `config.json` in the base directory. Every field
//! has a default so older or partial files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::SplitbookPaths;
use crate::error::SplitError;
use crate::models::category::normalize_currency;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency used when an expense does not name one
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Date format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether state changes are written to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Whether a new session starts with the demo friends and user
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: default_currency(),
            date_format: default_date_format(),
            audit_enabled: true,
            seed_demo_data: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use the defaults if there is no file
    ///
    /// Nothing is written; call [`Settings::save`] to persist.
    pub fn load_or_create(paths: &SplitbookPaths) -> Result<Self, SplitError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SplitError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| SplitError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self, paths: &SplitbookPaths) -> Result<(), SplitError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SplitError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SplitError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    fn validate(&self) -> Result<(), SplitError> {
        if normalize_currency(&self.default_currency).is_none() {
            return Err(SplitError::Config(format!(
                "default_currency must be a three-letter code, got '{}'",
                self.default_currency
            )));
        }
        Ok(())
    }
}
