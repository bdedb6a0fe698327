//! Audit logging for Splitbook
//!
//! Every state change in a session (expense added, friend added or removed,
//! user registered, login, logout) is appended to a line-delimited JSON log.
//!
//! - `AuditEntry`: one line, with timestamp, operation, entity and an
//!   optional JSON snapshot of the entity.
//! - `AuditLogger`: appends entries and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
