//! HTTP handlers: generic resource CRUD, association links, users, and the
//! unauthenticated root.

pub mod crud;
pub mod links;
pub mod user;

use crate::error::{ApiError, AppError, INVALID_REQUEST};
use uuid::Uuid;

/// Path ids that are not UUIDs cannot name a row, so they are reported as missing.
pub(crate) fn parse_id(raw: &str, resource: &'static str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::from_service(AppError::not_found(resource, raw), INVALID_REQUEST))
}
