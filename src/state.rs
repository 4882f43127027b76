//! Shared application state for all routes.

use crate::auth::JwtKeys;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub jwt: Arc<JwtKeys>,
}

impl AppState {
    pub fn new(pool: PgPool, secret_key: &str) -> Self {
        AppState {
            pool,
            jwt: Arc::new(JwtKeys::new(secret_key.as_bytes())),
        }
    }
}
