//! Bearer-token authentication and the admin check.
//!
//! Tokens are HS256-signed claim sets carrying at least a `username`. An
//! `exp` claim is honoured when present but not required.

use crate::error::{ApiError, UNEXPECTED_ERROR};
use crate::models::User;
use crate::service::user;
use axum::http::{header, HeaderMap, StatusCode};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgConnection;
use thiserror::Error;

pub const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing bearer credentials")]
    MissingCredentials,
    #[error("malformed authorization header")]
    MalformedHeader,
    #[error("invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("no user named '{0}'")]
    UnknownUser(String),
    #[error("user '{0}' is not an active admin")]
    NotAdmin(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Db(e) => {
                tracing::error!(error = %e, "admin lookup failed");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR)
            }
            AuthError::MissingCredentials => {
                tracing::warn!("request without bearer credentials");
                ApiError::unauthorized("Not authenticated")
            }
            AuthError::NotAdmin(username) => {
                tracing::warn!(username = %username, "rejected non-admin caller");
                ApiError::unauthorized("Admin privileges required")
            }
            other => {
                tracing::warn!(error = %other, "rejected credentials");
                ApiError::unauthorized("Could not validate credentials")
            }
        }
    }
}

/// Signing and verification keys derived from the shared secret.
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtKeys {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.required_spec_claims.clear();
        JwtKeys {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Mint a token for `username`, expiring after `ttl` when given.
    pub fn issue(&self, username: &str, ttl: Option<Duration>) -> Result<String, AuthError> {
        let claims = Claims {
            username: username.to_string(),
            exp: ttl.map(|ttl| (Utc::now() + ttl).timestamp().max(0) as u64),
        };
        Ok(jsonwebtoken::encode(&Header::new(ALGORITHM), &claims, &self.encoding)?)
    }

    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }
}

/// Extract the token from `Authorization: Bearer <token>`.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingCredentials)?;
    let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;
    let token = value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MalformedHeader)?
        .trim();
    if token.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    Ok(token)
}

/// Resolve the token subject to a user that is active and has the admin flag.
pub async fn resolve_admin(conn: &mut PgConnection, claims: &Claims) -> Result<User, AuthError> {
    let user = user::find_by_username(conn, &claims.username)
        .await?
        .ok_or_else(|| AuthError::UnknownUser(claims.username.clone()))?;
    if !user.is_admin || !user.is_active {
        return Err(AuthError::NotAdmin(user.username));
    }
    Ok(user)
}
