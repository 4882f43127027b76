//! Admin guard for every resource endpoint.

use crate::auth::{self, AuthError};
use crate::error::ApiError;
use crate::models::User;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

/// The authenticated caller, guaranteed to be an active admin.
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = auth::extract_bearer(&parts.headers)?;
        let claims = state.jwt.decode(token)?;
        let mut conn = state.pool.acquire().await.map_err(AuthError::Db)?;
        let user = auth::resolve_admin(&mut conn, &claims).await?;
        tracing::debug!(username = %user.username, "admin authenticated");
        Ok(AdminUser(user))
    }
}
