//! JWT Issuance and Verification
//!
//! HS256 tokens carrying the username in `sub`, with a configurable expiry.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

// == Claims ==
/// JWT claims for an authenticated session.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the authenticated user
    pub sub: String,
    /// Expiry as Unix seconds
    pub exp: i64,
}

// == Jwt Keys ==
/// Encoding/decoding key pair derived from the shared secret.
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_hours: i64,
}

impl JwtKeys {
    // == Constructor ==
    /// Builds keys from the configured secret and token lifetime.
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_hours,
        }
    }

    // == Issue ==
    /// Signs a token for `username` expiring `ttl_hours` from now.
    pub fn issue(&self, username: &str) -> Result<String> {
        let exp = (Utc::now() + Duration::hours(self.ttl_hours)).timestamp();
        let claims = Claims {
            sub: username.to_string(),
            exp,
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| ApiError::Internal(format!("Failed to sign token: {}", e)))
    }

    // == Verify ==
    /// Validates a token's signature and expiry, returning its claims.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))
    }
}
