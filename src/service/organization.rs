use super::{CrudService, Labels, Page};
use crate::error::AppError;
use crate::models::Organization;
use crate::schemas::organization::{OrganizationCreate, OrganizationResponse, OrganizationUpdate, LABELS};
use async_trait::async_trait;
use sqlx::PgConnection;
use uuid::Uuid;

const COLUMNS: &str = "id, name, description, created_at, updated_at";

#[async_trait]
impl CrudService for Organization {
    const LABELS: Labels = LABELS;

    type Create = OrganizationCreate;
    type Update = OrganizationUpdate;
    type Response = OrganizationResponse;

    async fn create(conn: &mut PgConnection, input: OrganizationCreate) -> Result<Organization, AppError> {
        let sql = format!(
            "INSERT INTO organizations (id, name, description) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, "create organization");
        sqlx::query_as::<_, Organization>(&sql)
            .bind(Uuid::new_v4())
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(conn)
            .await
            .map_err(|e| AppError::from_insert(e, LABELS.singular))
    }

    async fn list(conn: &mut PgConnection, page: Page) -> Result<Vec<Organization>, AppError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM organizations ORDER BY created_at, id LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Organization>(&sql)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    async fn get(conn: &mut PgConnection, id: Uuid) -> Result<Organization, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM organizations WHERE id = $1");
        sqlx::query_as::<_, Organization>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }

    async fn update(
        conn: &mut PgConnection,
        id: Uuid,
        input: OrganizationUpdate,
    ) -> Result<Organization, AppError> {
        let sql = format!(
            "UPDATE organizations SET name = $2, description = $3, updated_at = now() \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organization>(&sql)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::from_write(e, LABELS.singular))?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }

    /// Roles, invitations and memberships of the organization go with it.
    async fn delete(conn: &mut PgConnection, id: Uuid) -> Result<Organization, AppError> {
        let sql = format!("DELETE FROM organizations WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Organization>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::from_write(e, LABELS.singular))?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }
}
