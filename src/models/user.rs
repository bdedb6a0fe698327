//! User model
//!
//! Users only ever hold an Argon2 PHC hash of their password. The hash is
//! skipped when a user is serialized so it never reaches the audit log or
//! an export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,

    pub name: String,

    /// Stored trimmed; compared case-insensitively
    pub email: String,

    #[serde(skip_serializing, default)]
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(),
            name: name.into().trim().to_string(),
            email: email.into().trim().to_string(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }

    /// Normalize an email for lookups
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    pub fn has_email(&self, email: &str) -> bool {
        Self::normalize_email(&self.email) == Self::normalize_email(email)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
