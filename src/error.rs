//! Custom error types for Splitbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Splitbook operations
#[derive(Error, Debug)]
pub enum SplitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Field-level validation failure on an expense form
    #[error("{field}: {message}")]
    ExpenseValidation {
        field: &'static str,
        message: String,
    },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Login with an unknown email or a wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A command that needs a logged-in user was issued without one
    #[error("Not logged in")]
    NotLoggedIn,

    /// Password hashing errors
    #[error("Credential error: {0}")]
    Credential(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SplitError {
    /// Create a "not found" error for friends
    pub fn friend_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Friend",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Registration with an email that is already taken
    pub fn user_exists(email: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "User",
            identifier: email.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::ExpenseValidation { .. })
    }

    /// Message shown to the user for failures they can fix themselves
    pub fn user_message(&self) -> String {
        match self {
            Self::Duplicate {
                entity_type: "User",
                ..
            } => "User already exists".to_string(),
            Self::ExpenseValidation { message, .. } => message.clone(),
            Self::NotLoggedIn => "Not logged in. Use 'login <email>' first.".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for SplitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SplitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for SplitError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Splitbook operations
pub type SplitResult<T> = Result<T, SplitError>;
