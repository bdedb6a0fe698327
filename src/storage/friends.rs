//! Friend directory
//!
//! Holds the roster in the order friends were added.

use std::sync::RwLock;

use crate::error::SplitError;
use crate::models::{Friend, FriendId};

use super::{read_lock, write_lock};

#[derive(Default)]
pub struct FriendDirectory {
    friends: RwLock<Vec<Friend>>,
}

impl FriendDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, friend: Friend) -> Result<(), SplitError> {
        write_lock(&self.friends)?.push(friend);
        Ok(())
    }

    /// Remove a friend if present
    ///
    /// Returns the removed entry, or `None` when the id is unknown. Expenses
    /// that reference the friend are left alone.
    pub fn remove(&self, id: FriendId) -> Result<Option<Friend>, SplitError> {
        let mut friends = write_lock(&self.friends)?;
        Ok(friends
            .iter()
            .position(|f| f.id == id)
            .map(|index| friends.remove(index)))
    }

    pub fn get(&self, id: FriendId) -> Result<Option<Friend>, SplitError> {
        Ok(read_lock(&self.friends)?
            .iter()
            .find(|f| f.id == id)
            .cloned())
    }

    /// All friends in roster order
    pub fn get_all(&self) -> Result<Vec<Friend>, SplitError> {
        Ok(read_lock(&self.friends)?.clone())
    }

    /// First friend whose name matches, case-insensitively
    pub fn get_by_name(&self, name: &str) -> Result<Option<Friend>, SplitError> {
        Ok(read_lock(&self.friends)?
            .iter()
            .find(|f| f.matches_name(name))
            .cloned())
    }

    /// Look a friend up by name first, then by full or short id
    pub fn find(&self, identifier: &str) -> Result<Option<Friend>, SplitError> {
        if let Some(friend) = self.get_by_name(identifier)? {
            return Ok(Some(friend));
        }
        Ok(read_lock(&self.friends)?
            .iter()
            .find(|f| f.id.matches(identifier))
            .cloned())
    }

    pub fn count(&self) -> Result<usize, SplitError> {
        Ok(read_lock(&self.friends)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory_with(names: &[&str]) -> FriendDirectory {
        let directory = FriendDirectory::new();
        for name in names {
            directory.insert(Friend::new(*name)).unwrap();
        }
        directory
    }

    #[test]
    fn test_roster_order() {
        let directory = directory_with(&["Alice", "Bob", "Charlie"]);
        let names: Vec<_> = directory
            .get_all()
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn test_remove_present() {
        let directory = directory_with(&["Alice", "Bob"]);
        let bob = directory.get_by_name("bob").unwrap().unwrap();

        let removed = directory.remove(bob.id).unwrap();
        assert_eq!(removed, Some(bob));
        assert_eq!(directory.count().unwrap(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let directory = directory_with(&["Alice", "Bob"]);
        let before = directory.get_all().unwrap();

        assert_eq!(directory.remove(FriendId::new()).unwrap(), None);
        assert_eq!(directory.get_all().unwrap(), before);
    }

    #[test]
    fn test_find_by_name_or_id() {
        let directory = directory_with(&["Alice"]);
        let alice = directory.get_by_name("Alice").unwrap().unwrap();

        assert_eq!(directory.find("ALICE").unwrap(), Some(alice.clone()));
        assert_eq!(directory.find(&alice.id.short()).unwrap(), Some(alice));
        assert_eq!(directory.find("Zed").unwrap(), None);
    }
}
