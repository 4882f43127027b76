//! Accounts are provisioned outside this API; it only reads and removes them.

use super::Page;
use crate::error::AppError;
use crate::models::User;
use crate::schemas::user::LABELS;
use sqlx::PgConnection;
use uuid::Uuid;

const COLUMNS: &str =
    "id, username, email, password, first_name, last_name, is_active, is_admin, created_at, updated_at";

pub async fn find_by_username(conn: &mut PgConnection, username: &str) -> Result<Option<User>, sqlx::Error> {
    let sql = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
    sqlx::query_as::<_, User>(&sql)
        .bind(username)
        .fetch_optional(conn)
        .await
}

pub async fn list(conn: &mut PgConnection, page: Page) -> Result<Vec<User>, AppError> {
    let sql = format!("SELECT {COLUMNS} FROM users ORDER BY created_at, id LIMIT $1 OFFSET $2");
    let rows = sqlx::query_as::<_, User>(&sql)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(conn)
        .await?;
    Ok(rows)
}

pub async fn get(conn: &mut PgConnection, id: Uuid) -> Result<User, AppError> {
    let sql = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
    sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(conn)
        .await?
        .ok_or_else(|| AppError::not_found(LABELS.singular, id))
}

/// Removes the account together with everything it owns.
pub async fn delete(conn: &mut PgConnection, id: Uuid) -> Result<User, AppError> {
    let sql = format!("DELETE FROM users WHERE id = $1 RETURNING {COLUMNS}");
    sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::from_write(e, LABELS.singular))?
        .ok_or_else(|| AppError::not_found(LABELS.singular, id))
}
