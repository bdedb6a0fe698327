//! Path management for Splitbook
//!
//! Only configuration, the audit log and export artifacts touch the disk;
//! session state is never written.
//!
//! ## Path Resolution Order
//!
//! 1. `SPLITBOOK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `splitbook`
//!    (`~/.config/splitbook` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SplitError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SPLITBOOK_DATA_DIR";

#[derive(Debug, Clone)]
pub struct SplitbookPaths {
    base_dir: PathBuf,
}

impl SplitbookPaths {
    /// Resolve the base directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SplitError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "splitbook")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    SplitError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Use a fixed base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Default directory for export artifacts
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Create the base and export directories
    pub fn ensure_directories(&self) -> Result<(), SplitError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SplitError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.exports_dir())
            .map_err(|e| SplitError::Io(format!("Failed to create exports directory: {}", e)))?;

        Ok(())
    }
}
