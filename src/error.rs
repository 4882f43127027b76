//! Typed errors and HTTP mapping.
//!
//! Services return [`AppError`]; handlers translate it once into an [`ApiError`],
//! which is the only failure type that reaches the client (as an [`Envelope`]).

use crate::response::Envelope;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Generic message for anything the client cannot act on.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Validation message used when a handler has no resource-specific wording.
pub const INVALID_REQUEST: &str = "Invalid request";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing setting: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },
    #[error("{resource} conflict: {detail}")]
    Conflict { resource: &'static str, detail: String },
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("migration: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        AppError::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Classify a failed INSERT: uniqueness is a conflict, every other failure
    /// is reported to the client as invalid input.
    pub fn from_insert(err: sqlx::Error, resource: &'static str) -> Self {
        match err {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Conflict {
                resource,
                detail: db.message().to_string(),
            },
            sqlx::Error::Database(db) => AppError::Validation(db.message().to_string()),
            other => AppError::Validation(other.to_string()),
        }
    }

    /// Classify a failed UPDATE/DELETE: uniqueness is a conflict, referential
    /// and check violations are validation failures, the rest is internal.
    pub fn from_write(err: sqlx::Error, resource: &'static str) -> Self {
        match err {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Conflict {
                resource,
                detail: db.message().to_string(),
            },
            sqlx::Error::Database(db)
                if db.is_foreign_key_violation() || db.is_check_violation() =>
            {
                AppError::Validation(db.message().to_string())
            }
            other => AppError::Db(other),
        }
    }
}

/// Client-facing failure: a status code plus a generic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Translate a service failure, using `invalid_message` for validation errors.
    /// Internal detail is logged here and never returned.
    pub fn from_service(err: AppError, invalid_message: &str) -> Self {
        match err {
            AppError::NotFound { resource, id } => {
                tracing::info!(resource, id = %id, "not found");
                Self::new(StatusCode::NOT_FOUND, format!("{resource} not found"))
            }
            AppError::Conflict { resource, detail } => {
                tracing::error!(resource, detail = %detail, "conflict");
                Self::new(StatusCode::CONFLICT, format!("{resource} already exists"))
            }
            AppError::Validation(detail) => {
                tracing::debug!(detail = %detail, "validation failed");
                Self::new(StatusCode::BAD_REQUEST, invalid_message)
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                Self::internal()
            }
            AppError::Migrate(e) => {
                tracing::error!(error = %e, "migration error");
                Self::internal()
            }
            AppError::Internal(detail) => {
                tracing::error!(detail = %detail, "internal error");
                Self::internal()
            }
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError::from_service(err, INVALID_REQUEST)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let unauthorized = self.status == StatusCode::UNAUTHORIZED;
        let mut response = Envelope::<()>::failure(self.status, self.message).into_response();
        if unauthorized {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
