//! Standard response envelope: `{message, data, error, status_code}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Uniform JSON body of every endpoint.
///
/// For `status_code >= 300` only `error` is present; otherwise only `data`.
/// The constructors enforce this, so it holds for every response built here.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub status_code: u16,
}

impl<T> Envelope<T> {
    pub fn success(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self::build(status, message.into(), Some(data))
    }

    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self::build(status, message.into(), None)
    }

    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::success(StatusCode::OK, message, data)
    }

    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::success(StatusCode::CREATED, message, data)
    }

    fn build(status: StatusCode, message: String, data: Option<T>) -> Self {
        if status.as_u16() >= 300 {
            Envelope {
                error: Some(message.clone()),
                message,
                data: None,
                status_code: status.as_u16(),
            }
        } else {
            Envelope {
                message,
                data,
                error: None,
                status_code: status.as_u16(),
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}
