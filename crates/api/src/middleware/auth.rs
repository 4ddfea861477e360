//! # Identity Extraction
//!
//! This module verifies the `Authorization: Bearer <token>` header and
//! turns it into the explicit [`Identity`] value handlers receive. The
//! token carries only the subject; the caller's role is read from the
//! users table so a stale token never grants a revoked role.
//!
//! Token issuance lives outside this service. [`create_token`] exists
//! for tests and operational tooling.

use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shopbook_core::{
    errors::BookingError,
    models::user::{Identity, Role},
};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Claims carried by a shopbook bearer token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user id)
    pub sub: Uuid,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Signs a token for the given user id.
pub fn create_token(
    user_id: Uuid,
    secret: &str,
    expiration_hours: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        exp: (now + Duration::hours(expiration_hours)).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verifies a token signature and expiry, returning its claims.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Extractor handing handlers the authenticated caller's [`Identity`].
///
/// Any failure along the way (missing header, bad signature, expired
/// token, unknown user) rejects the request with 401 and the uniform
/// "Not authorized to access this route" message.
pub struct AuthUser(pub Identity);

#[axum::async_trait]
impl FromRequestParts<Arc<ApiState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(BookingError::InvalidCredentials)?;

        let claims = decode_token(token, &state.jwt_secret)
            .map_err(|_| BookingError::InvalidCredentials)?;

        // Role comes from the user row, not the token
        let user = shopbook_db::repositories::user::get_user_by_id(&state.db_pool, claims.sub)
            .await
            .map_err(|_| BookingError::InvalidCredentials)?
            .ok_or(BookingError::InvalidCredentials)?;

        Ok(AuthUser(Identity::new(user.id, Role::from(user.role.as_str()))))
    }
}
