//! CLI commands for data export
//!
//! Writes the ledger or a full session snapshot to a file.

use chrono::Utc;
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::config::SplitbookPaths;
use crate::error::{SplitError, SplitResult};
use crate::export::{
    export_expense_table, export_expenses_csv, export_snapshot_json, export_snapshot_yaml,
};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV spreadsheet (expenses only)
    Csv,
    /// Plain-text table document (expenses only)
    Table,
    /// JSON snapshot of the whole session
    Json,
    /// YAML snapshot of the whole session
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Table => "txt",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Default export location: `exports/expenses-<timestamp>.<ext>`
pub fn default_output(paths: &SplitbookPaths, format: ExportFormat) -> PathBuf {
    paths.exports_dir().join(format!(
        "expenses-{}.{}",
        Utc::now().format("%Y%m%d-%H%M%S"),
        format.extension()
    ))
}

/// Handle the export command
pub fn handle_export(
    storage: &Storage,
    paths: &SplitbookPaths,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> SplitResult<()> {
    let output = output.unwrap_or_else(|| default_output(paths, format));

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            SplitError::Export(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let file = File::create(&output).map_err(|e| {
        SplitError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            export_expenses_csv(&storage.expenses.all()?, &mut writer)?;
        }
        ExportFormat::Table => {
            export_expense_table(&storage.expenses.all()?, Utc::now(), &mut writer)?;
        }
        ExportFormat::Json => export_snapshot_json(storage, &mut writer)?,
        ExportFormat::Yaml => export_snapshot_yaml(storage, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| SplitError::Export(e.to_string()))?;

    println!("Exported to: {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_output_location() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let path = default_output(&paths, ExportFormat::Yaml);
        assert!(path.starts_with(paths.exports_dir()));
        assert_eq!(path.extension().unwrap(), "yaml");
    }

    #[test]
    fn test_export_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::in_memory();
        let output = temp_dir.path().join("nested/dir/out.csv");

        handle_export(&storage, &paths, ExportFormat::Csv, Some(output.clone())).unwrap();

        let contents = std::fs::read_to_string(output).unwrap();
        assert!(contents.starts_with("Title,Amount,Currency"));
    }
}
