//! Session state for Splitbook
//!
//! All state is in memory and lives only as long as the `Storage` value.
//! Services borrow it; nothing global is involved. When an audit logger is
//! attached, services record their state changes through it.

pub mod friends;
pub mod ledger;
pub mod seed;
pub mod users;

pub use friends::FriendDirectory;
pub use ledger::ExpenseLedger;
pub use seed::seed_demo_data;
pub use users::UserRepository;

use serde::Serialize;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::audit::{AuditEntry, AuditLogger, EntityType, Operation};
use crate::config::{Settings, SplitbookPaths};
use crate::error::SplitError;

/// Owns every repository of a session
pub struct Storage {
    pub friends: FriendDirectory,
    pub expenses: ExpenseLedger,
    pub users: UserRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Empty session without audit logging
    pub fn in_memory() -> Self {
        Self {
            friends: FriendDirectory::new(),
            expenses: ExpenseLedger::new(),
            users: UserRepository::new(),
            audit: None,
        }
    }

    /// Session configured from settings: audit log and demo data as enabled
    pub fn open(paths: &SplitbookPaths, settings: &Settings) -> Result<Self, SplitError> {
        let mut storage = Self::in_memory();
        if settings.audit_enabled {
            paths.ensure_directories()?;
            storage.audit = Some(AuditLogger::new(paths.audit_log()));
        }
        if settings.seed_demo_data {
            seed_demo_data(&storage)?;
        }
        Ok(storage)
    }

    pub fn with_audit_logger(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), SplitError> {
        self.log(|| AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), SplitError> {
        self.log(|| AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_session(
        &self,
        operation: Operation,
        user_id: String,
        user_name: Option<String>,
    ) -> Result<(), SplitError> {
        self.log(|| AuditEntry::session(operation, user_id, user_name))
    }

    fn log(&self, entry: impl FnOnce() -> AuditEntry) -> Result<(), SplitError> {
        match &self.audit {
            Some(logger) => logger.log(&entry()),
            None => Ok(()),
        }
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::in_memory()
    }
}

pub(crate) fn read_lock<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, SplitError> {
    lock.read()
        .map_err(|e| SplitError::Storage(format!("Failed to acquire read lock: {}", e)))
}

pub(crate) fn write_lock<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, SplitError> {
    lock.write()
        .map_err(|e| SplitError::Storage(format!("Failed to acquire write lock: {}", e)))
}
