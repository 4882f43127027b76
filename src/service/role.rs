use super::{CrudService, Labels, Page};
use crate::error::AppError;
use crate::models::{Permission, Role};
use crate::schemas::role::{RoleCreate, RoleResponse, RoleUpdate, LABELS};
use async_trait::async_trait;
use sqlx::PgConnection;
use uuid::Uuid;

const COLUMNS: &str = "id, role_name, organization_id, is_active, created_at, updated_at";

#[async_trait]
impl CrudService for Role {
    const LABELS: Labels = LABELS;

    type Create = RoleCreate;
    type Update = RoleUpdate;
    type Response = RoleResponse;

    /// An unknown `organization_id` is rejected by the foreign key and
    /// surfaces as a validation failure.
    async fn create(conn: &mut PgConnection, input: RoleCreate) -> Result<Role, AppError> {
        let sql = format!(
            "INSERT INTO roles (id, role_name, organization_id, is_active) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, "create role");
        sqlx::query_as::<_, Role>(&sql)
            .bind(Uuid::new_v4())
            .bind(&input.role_name)
            .bind(input.organization_id)
            .bind(input.is_active)
            .fetch_one(conn)
            .await
            .map_err(|e| AppError::from_insert(e, LABELS.singular))
    }

    async fn list(conn: &mut PgConnection, page: Page) -> Result<Vec<Role>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM roles ORDER BY created_at, id LIMIT $1 OFFSET $2");
        let rows = sqlx::query_as::<_, Role>(&sql)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    async fn get(conn: &mut PgConnection, id: Uuid) -> Result<Role, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM roles WHERE id = $1");
        sqlx::query_as::<_, Role>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }

    async fn update(conn: &mut PgConnection, id: Uuid, input: RoleUpdate) -> Result<Role, AppError> {
        let sql = format!(
            "UPDATE roles SET role_name = $2, organization_id = $3, is_active = $4, updated_at = now() \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&sql)
            .bind(id)
            .bind(&input.role_name)
            .bind(input.organization_id)
            .bind(input.is_active)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::from_write(e, LABELS.singular))?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }

    async fn delete(conn: &mut PgConnection, id: Uuid) -> Result<Role, AppError> {
        let sql = format!("DELETE FROM roles WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Role>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::from_write(e, LABELS.singular))?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }
}

/// Permissions granted to a role, by name. Fails with not-found for an unknown role.
pub async fn permissions_of(conn: &mut PgConnection, role_id: Uuid) -> Result<Vec<Permission>, AppError> {
    Role::get(&mut *conn, role_id).await?;
    let rows = sqlx::query_as::<_, Permission>(
        "SELECT p.id, p.name, p.description, p.created_at, p.updated_at \
         FROM permissions p JOIN role_permission rp ON rp.permission_id = p.id \
         WHERE rp.role_id = $1 ORDER BY p.name",
    )
    .bind(role_id)
    .fetch_all(conn)
    .await?;
    Ok(rows)
}
