//! Auth Module
//!
//! Credential hashing, JWT issuance/verification, and the request extractor
//! that resolves the authenticated user.

mod extract;
mod password;
mod token;

pub use extract::AuthUser;
pub use password::{hash_password, verify_password};
pub use token::{Claims, JwtKeys};
