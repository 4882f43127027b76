use super::parse_id;
use crate::error::ApiError;
use crate::extractors::{AdminUser, DbSession, Pagination};
use crate::response::Envelope;
use crate::schemas::user::{UserResponse, LABELS};
use crate::service::user;
use axum::extract::Path;

pub async fn list(
    _admin: AdminUser,
    Pagination(page): Pagination,
    mut db: DbSession,
) -> Result<Envelope<Vec<UserResponse>>, ApiError> {
    let users = user::list(&mut db, page).await?;
    Ok(Envelope::ok(
        format!("{} fetched successfully", LABELS.plural),
        users.into_iter().map(UserResponse::from).collect(),
    ))
}

pub async fn read(
    _admin: AdminUser,
    Path(id): Path<String>,
    mut db: DbSession,
) -> Result<Envelope<UserResponse>, ApiError> {
    let id = parse_id(&id, LABELS.singular)?;
    let found = user::get(&mut db, id).await?;
    Ok(Envelope::ok(
        format!("{} fetched successfully", LABELS.singular),
        found.into(),
    ))
}

pub async fn delete(
    AdminUser(caller): AdminUser,
    Path(id): Path<String>,
    mut db: DbSession,
) -> Result<Envelope<UserResponse>, ApiError> {
    let id = parse_id(&id, LABELS.singular)?;
    let removed = user::delete(&mut db, id).await?;
    tracing::info!(by = %caller.username, username = %removed.username, "user deleted");
    Ok(Envelope::ok(
        format!("{} deleted successfully", LABELS.singular),
        removed.into(),
    ))
}
