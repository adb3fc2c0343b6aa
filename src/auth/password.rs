//! Password Hashing
//!
//! Bcrypt hashing and verification for account credentials.

use crate::error::{ApiError, Result};

/// Bcrypt work factor used for new password hashes
const BCRYPT_COST: u32 = 10;

// == Hash Password ==
/// Hashes a plaintext password for storage.
pub fn hash_password(password: &str) -> Result<String> {
    bcrypt::hash(password, BCRYPT_COST)
        .map_err(|e| ApiError::Internal(format!("Failed to hash password: {}", e)))
}

// == Verify Password ==
/// Checks a plaintext password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(password, hash)
        .map_err(|e| ApiError::Internal(format!("Failed to verify password: {}", e)))
}
