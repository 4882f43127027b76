//! Generic CRUD handlers, instantiated once per resource type.
//!
//! Every handler takes [`AdminUser`] first, so unauthenticated requests are
//! rejected before a database session is opened or the body is read.

use super::parse_id;
use crate::error::{ApiError, AppError};
use crate::extractors::{AdminUser, DbSession, Pagination, ValidatedJson};
use crate::response::Envelope;
use crate::service::CrudService;
use axum::extract::Path;

fn fail<R: CrudService>(err: AppError) -> ApiError {
    ApiError::from_service(err, R::LABELS.invalid)
}

pub async fn create<R: CrudService>(
    _admin: AdminUser,
    mut db: DbSession,
    ValidatedJson(input): ValidatedJson<R::Create>,
) -> Result<Envelope<R::Response>, ApiError> {
    let row = R::create(&mut db, input).await.map_err(fail::<R>)?;
    tracing::info!(resource = R::LABELS.singular, "created");
    Ok(Envelope::created(
        format!("{} created successfully", R::LABELS.singular),
        row.into(),
    ))
}

pub async fn list<R: CrudService>(
    _admin: AdminUser,
    Pagination(page): Pagination,
    mut db: DbSession,
) -> Result<Envelope<Vec<R::Response>>, ApiError> {
    let rows = R::list(&mut db, page).await.map_err(fail::<R>)?;
    Ok(Envelope::ok(
        format!("{} fetched successfully", R::LABELS.plural),
        rows.into_iter().map(Into::into).collect(),
    ))
}

pub async fn read<R: CrudService>(
    _admin: AdminUser,
    Path(id): Path<String>,
    mut db: DbSession,
) -> Result<Envelope<R::Response>, ApiError> {
    let id = parse_id(&id, R::LABELS.singular)?;
    let row = R::get(&mut db, id).await.map_err(fail::<R>)?;
    Ok(Envelope::ok(
        format!("{} fetched successfully", R::LABELS.singular),
        row.into(),
    ))
}

pub async fn update<R: CrudService>(
    _admin: AdminUser,
    Path(id): Path<String>,
    mut db: DbSession,
    ValidatedJson(input): ValidatedJson<R::Update>,
) -> Result<Envelope<R::Response>, ApiError> {
    let id = parse_id(&id, R::LABELS.singular)?;
    let row = R::update(&mut db, id, input).await.map_err(fail::<R>)?;
    Ok(Envelope::ok(
        format!("{} updated successfully", R::LABELS.singular),
        row.into(),
    ))
}

/// Responds with the last state of the removed row.
pub async fn delete<R: CrudService>(
    _admin: AdminUser,
    Path(id): Path<String>,
    mut db: DbSession,
) -> Result<Envelope<R::Response>, ApiError> {
    let id = parse_id(&id, R::LABELS.singular)?;
    let row = R::delete(&mut db, id).await.map_err(fail::<R>)?;
    tracing::info!(resource = R::LABELS.singular, %id, "deleted");
    Ok(Envelope::ok(
        format!("{} deleted successfully", R::LABELS.singular),
        row.into(),
    ))
}
