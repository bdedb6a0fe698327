//! YAML Export functionality
//!
//! The same snapshot as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{SplitError, SplitResult};
use crate::export::json::SessionSnapshot;
use crate::storage::Storage;

/// Export the session to YAML format
pub fn export_snapshot_yaml<W: Write>(storage: &Storage, writer: &mut W) -> SplitResult<()> {
    let snapshot = SessionSnapshot::from_storage(storage)?;
    let export_err = |e: std::io::Error| SplitError::Export(e.to_string());

    writeln!(writer, "# Splitbook session export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", snapshot.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", snapshot.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &snapshot).map_err(|e| SplitError::Export(e.to_string()))?;

    Ok(())
}
