//! User Model
//!
//! Registered account record. Only the bcrypt hash of the password is kept.

/// A registered user account.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique username, also used as the task owner key
    pub username: String,
    /// Bcrypt hash of the user's password
    pub password_hash: String,
}

impl User {
    /// Creates a new user from a username and an already-hashed password.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}
