//! User Store
//!
//! In-memory account storage keyed by username.

use std::collections::HashMap;

use crate::models::User;

// == User Store ==
/// Mapping from username to account record.
#[derive(Debug, Default)]
pub struct UserStore {
    users: HashMap<String, User>,
}

impl UserStore {
    // == Constructor ==
    /// Creates a new empty UserStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Registers a new user.
    ///
    /// Returns false without modifying the store if the username is taken.
    pub fn insert(&mut self, user: User) -> bool {
        if self.users.contains_key(&user.username) {
            return false;
        }
        self.users.insert(user.username.clone(), user);
        true
    }

    // == Get ==
    /// Looks up a user by username.
    pub fn get(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    // == Contains ==
    /// Checks whether a username is already registered.
    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    // == Length ==
    /// Returns the number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    // == Is Empty ==
    /// Returns true if no users are registered.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut store = UserStore::new();
        assert!(store.insert(User::new("alice", "hash")));

        let user = store.get("alice").unwrap();
        assert_eq!(user.password_hash, "hash");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let mut store = UserStore::new();
        assert!(store.insert(User::new("alice", "hash1")));
        assert!(!store.insert(User::new("alice", "hash2")));

        // Original hash untouched.
        assert_eq!(store.get("alice").unwrap().password_hash, "hash1");
    }

    #[test]
    fn test_contains() {
        let mut store = UserStore::new();
        assert!(!store.contains("alice"));
        store.insert(User::new("alice", "hash"));
        assert!(store.contains("alice"));
    }

    #[test]
    fn test_get_unknown() {
        let store = UserStore::new();
        assert!(store.get("nobody").is_none());
        assert!(store.is_empty());
    }
}
