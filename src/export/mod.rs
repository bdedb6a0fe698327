//! Export module for Splitbook
//!
//! Exports never modify the session. Formats:
//! - CSV: one row per expense (spreadsheet-compatible)
//! - Table: a plain-text table document
//! - JSON / YAML: a full session snapshot

pub mod csv;
pub mod json;
pub mod table;
pub mod yaml;

pub use self::csv::{export_expenses_csv, CSV_HEADERS};
pub use json::{export_snapshot_json, ExportMetadata, SessionSnapshot, EXPORT_SCHEMA_VERSION};
pub use table::{export_expense_table, render_expense_table};
pub use yaml::export_snapshot_yaml;
