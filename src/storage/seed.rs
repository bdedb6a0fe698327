//! Demo data for a fresh session

use crate::crypto::hash_password;
use crate::error::SplitError;
use crate::models::{Friend, User};

use super::Storage;

/// Friends on the roster of a new session
pub const DEMO_FRIENDS: &[&str] = &["Alice", "Bob", "Charlie", "David"];

/// The demo account: (name, email, password)
pub const DEMO_USER: (&str, &str, &str) = ("John Doe", "john@example.com", "password123");

/// Fill an empty session with the demo roster and demo account
///
/// Does nothing to a store that already has friends or users. Seeding is not
/// audited.
pub fn seed_demo_data(storage: &Storage) -> Result<(), SplitError> {
    if storage.friends.count()? == 0 {
        for name in DEMO_FRIENDS {
            storage.friends.insert(Friend::new(*name))?;
        }
    }

    if storage.users.count()? == 0 {
        let (name, email, password) = DEMO_USER;
        storage
            .users
            .insert(User::new(name, email, hash_password(password)?))?;
    }

    Ok(())
}
