//! Tenancy API: admin-only REST backend for users, organizations, roles,
//! permissions and user-owned content on PostgreSQL.

pub mod auth;
pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod schemas;
pub mod service;
pub mod settings;
pub mod state;

pub use auth::{Claims, JwtKeys};
pub use db::{connect, ensure_database_exists};
pub use error::{ApiError, AppError, ConfigError};
pub use migration::{apply_migrations, revert_last};
pub use response::Envelope;
pub use routes::{api_routes, build_app, common_routes, API_PREFIX};
pub use service::{CrudService, Page};
pub use settings::Settings;
pub use state::AppState;
