use crate::error::ApiError;
use crate::service::Page;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
};
use serde::Deserialize;

pub const INVALID_PAGINATION: &str = "Invalid pagination parameters";

#[derive(Debug, Deserialize)]
struct PageParams {
    skip: Option<i64>,
    limit: Option<i64>,
}

/// `?skip=&limit=` for list endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub Page);

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(detail = %rejection.body_text(), "rejected query string");
                ApiError::new(StatusCode::BAD_REQUEST, INVALID_PAGINATION)
            })?;
        let page = Page::new(params.skip, params.limit)
            .map_err(|e| ApiError::from_service(e, INVALID_PAGINATION))?;
        Ok(Pagination(page))
    }
}
