//! In-memory user store and the current login

use std::sync::RwLock;

use crate::error::SplitError;
use crate::models::{User, UserId};

use super::{read_lock, write_lock};

#[derive(Default)]
pub struct UserRepository {
    users: RwLock<Vec<User>>,
    current: RwLock<Option<UserId>>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, user: User) -> Result<(), SplitError> {
        write_lock(&self.users)?.push(user);
        Ok(())
    }

    pub fn get(&self, id: UserId) -> Result<Option<User>, SplitError> {
        Ok(read_lock(&self.users)?
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    /// Case-insensitive email lookup
    pub fn get_by_email(&self, email: &str) -> Result<Option<User>, SplitError> {
        Ok(read_lock(&self.users)?
            .iter()
            .find(|u| u.has_email(email))
            .cloned())
    }

    pub fn count(&self) -> Result<usize, SplitError> {
        Ok(read_lock(&self.users)?.len())
    }

    pub fn set_current(&self, id: Option<UserId>) -> Result<(), SplitError> {
        *write_lock(&self.current)? = id;
        Ok(())
    }

    /// The logged-in user, if any
    pub fn current(&self) -> Result<Option<User>, SplitError> {
        let current = *read_lock(&self.current)?;
        match current {
            Some(id) => self.get(id),
            None => Ok(None),
        }
    }
}
