//! Authenticated User Extractor
//!
//! Axum extractor that validates the `Authorization: Bearer` header and
//! resolves the requesting username. Task handlers take `AuthUser` as an
//! argument; extraction failure short-circuits with 401.

use axum::{async_trait, extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

use crate::api::AppState;
use crate::error::ApiError;

// == Auth User ==
/// The authenticated caller, resolved from a verified JWT.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Username from the token's `sub` claim
    pub username: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Invalid authorization header".to_string()))?;

        let claims = state.jwt.verify(token)?;

        Ok(AuthUser {
            username: claims.sub,
        })
    }
}
