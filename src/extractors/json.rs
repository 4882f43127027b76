use crate::error::ApiError;
use crate::service::Validate;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;

/// JSON body that has been parsed and checked with [`Validate`].
///
/// Parse and field failures are both 400 with the body type's message;
/// an oversized body is 413.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                return ApiError::new(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large");
            }
            tracing::debug!(detail = %rejection.body_text(), "rejected request body");
            ApiError::new(StatusCode::BAD_REQUEST, T::INVALID_MESSAGE)
        })?;
        value
            .validate()
            .map_err(|e| ApiError::from_service(e, T::INVALID_MESSAGE))?;
        Ok(ValidatedJson(value))
    }
}
