//! Friend service
//!
//! Roster management on top of the friend directory.

use crate::audit::EntityType;
use crate::error::{SplitError, SplitResult};
use crate::models::{Friend, FriendId};
use crate::storage::Storage;

pub struct FriendService<'a> {
    storage: &'a Storage,
}

impl<'a> FriendService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a friend to the roster
    ///
    /// Names are trimmed. Two friends may share a name; they still get
    /// distinct ids.
    pub fn add(&self, name: &str) -> SplitResult<Friend> {
        let friend = Friend::new(name.trim());
        friend
            .validate()
            .map_err(|e| SplitError::Validation(e.to_string()))?;

        self.storage.friends.insert(friend.clone())?;

        self.storage.log_create(
            EntityType::Friend,
            friend.id.to_string(),
            Some(friend.name.clone()),
            &friend,
        )?;

        Ok(friend)
    }

    /// Remove a friend if present; an unknown id is a no-op returning `None`
    ///
    /// Expenses that already reference the friend keep the reference.
    pub fn remove(&self, id: FriendId) -> SplitResult<Option<Friend>> {
        let removed = self.storage.friends.remove(id)?;

        if let Some(friend) = &removed {
            self.storage.log_delete(
                EntityType::Friend,
                friend.id.to_string(),
                Some(friend.name.clone()),
                friend,
            )?;
        }

        Ok(removed)
    }

    /// The roster in the order friends were added
    pub fn list(&self) -> SplitResult<Vec<Friend>> {
        self.storage.friends.get_all()
    }

    pub fn get(&self, id: FriendId) -> SplitResult<Option<Friend>> {
        self.storage.friends.get(id)
    }

    /// Find a friend by name or id
    pub fn find(&self, identifier: &str) -> SplitResult<Option<Friend>> {
        self.storage.friends.find(identifier)
    }

    /// Resolve each identifier to a friend, failing on the first unknown one
    pub fn resolve_all<S: AsRef<str>>(&self, identifiers: &[S]) -> SplitResult<Vec<Friend>> {
        identifiers
            .iter()
            .map(|ident| {
                let ident = ident.as_ref();
                self.find(ident)?
                    .ok_or_else(|| SplitError::friend_not_found(ident))
            })
            .collect()
    }
}
