//! Service layer: one function per operation per resource, each a single
//! statement (one implicit transaction) against an explicitly passed connection.

pub mod blog;
pub mod invitation;
pub mod job;
pub mod links;
pub mod organization;
pub mod permission;
pub mod profile;
pub mod role;
pub mod subscription;
pub mod user;
pub mod validation;

use crate::error::AppError;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use sqlx::PgConnection;
use uuid::Uuid;

pub use validation::Validate;

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Offset/limit window for list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Page {
    /// Defaults: offset 0, limit 10. The limit is capped at [`MAX_LIMIT`].
    pub fn new(skip: Option<i64>, limit: Option<i64>) -> Result<Self, AppError> {
        let offset = skip.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if offset < 0 {
            return Err(AppError::Validation("skip must not be negative".into()));
        }
        if limit < 0 {
            return Err(AppError::Validation("limit must not be negative".into()));
        }
        Ok(Page {
            offset,
            limit: limit.min(MAX_LIMIT),
        })
    }
}

impl Default for Page {
    fn default() -> Self {
        Page {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Names used in client-facing messages for one resource.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub singular: &'static str,
    pub plural: &'static str,
    pub invalid: &'static str,
}

/// CRUD contract shared by every resource. Implemented on the row type.
#[async_trait]
pub trait CrudService: Sized + Send + 'static {
    const LABELS: Labels;

    type Create: DeserializeOwned + Validate + Send + 'static;
    type Update: DeserializeOwned + Validate + Send + 'static;
    type Response: Serialize + From<Self> + Send + 'static;

    /// Persist a new row with a fresh id; uniqueness failures are conflicts,
    /// other storage rejections are validation failures.
    async fn create(conn: &mut PgConnection, input: Self::Create) -> Result<Self, AppError>;

    /// Rows ordered by creation time, windowed by `page`.
    async fn list(conn: &mut PgConnection, page: Page) -> Result<Vec<Self>, AppError>;

    async fn get(conn: &mut PgConnection, id: Uuid) -> Result<Self, AppError>;

    /// Overwrite the editable fields and refresh `updated_at`.
    async fn update(conn: &mut PgConnection, id: Uuid, input: Self::Update) -> Result<Self, AppError>;

    /// Remove the row and return its last state.
    async fn delete(conn: &mut PgConnection, id: Uuid) -> Result<Self, AppError>;
}
