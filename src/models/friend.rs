//! Friend model
//!
//! A friend is a named participant who can pay for or share in expenses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::FriendId;

/// Maximum length of a friend name
pub const MAX_NAME_LEN: usize = 100;

/// A roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub id: FriendId,

    pub name: String,

    /// When the friend was added to the roster
    pub created_at: DateTime<Utc>,
}

impl Friend {
    /// Create a new friend with a fresh ID
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: FriendId::new(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<(), FriendValidationError> {
        if self.name.trim().is_empty() {
            return Err(FriendValidationError::EmptyName);
        }

        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(FriendValidationError::NameTooLong(self.name.chars().count()));
        }

        Ok(())
    }

    /// Case-insensitive name comparison
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

impl fmt::Display for Friend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for friends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FriendValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for FriendValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Friend name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Friend name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
        }
    }
}

impl std::error::Error for FriendValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_friend_gets_unique_id() {
        let a = Friend::new("Alice");
        let b = Friend::new("Alice");
        assert_eq!(a.name, "Alice");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_validation() {
        let mut friend = Friend::new("Bob");
        assert!(friend.validate().is_ok());

        friend.name = "   ".into();
        assert_eq!(friend.validate(), Err(FriendValidationError::EmptyName));

        friend.name = "x".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(
            friend.validate(),
            Err(FriendValidationError::NameTooLong(_))
        ));
    }

    #[test]
    fn test_matches_name() {
        let friend = Friend::new("Charlie");
        assert!(friend.matches_name("charlie"));
        assert!(friend.matches_name(" CHARLIE "));
        assert!(!friend.matches_name("Charles"));
    }
}
