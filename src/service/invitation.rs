use super::{CrudService, Labels, Page};
use crate::error::AppError;
use crate::models::Invitation;
use crate::schemas::invitation::{InvitationCreate, InvitationResponse, InvitationUpdate, LABELS};
use async_trait::async_trait;
use sqlx::PgConnection;
use uuid::Uuid;

const COLUMNS: &str = "id, user_id, organization_id, expires_at, is_valid, created_at, updated_at";

#[async_trait]
impl CrudService for Invitation {
    const LABELS: Labels = LABELS;

    type Create = InvitationCreate;
    type Update = InvitationUpdate;
    type Response = InvitationResponse;

    async fn create(conn: &mut PgConnection, input: InvitationCreate) -> Result<Invitation, AppError> {
        let sql = format!(
            "INSERT INTO invitations (id, user_id, organization_id, expires_at, is_valid) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, "create invitation");
        sqlx::query_as::<_, Invitation>(&sql)
            .bind(Uuid::new_v4())
            .bind(input.user_id)
            .bind(input.organization_id)
            .bind(input.expires_at)
            .bind(input.is_valid)
            .fetch_one(conn)
            .await
            .map_err(|e| AppError::from_insert(e, LABELS.singular))
    }

    async fn list(conn: &mut PgConnection, page: Page) -> Result<Vec<Invitation>, AppError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM invitations ORDER BY created_at, id LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Invitation>(&sql)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    async fn get(conn: &mut PgConnection, id: Uuid) -> Result<Invitation, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM invitations WHERE id = $1");
        sqlx::query_as::<_, Invitation>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }

    async fn update(
        conn: &mut PgConnection,
        id: Uuid,
        input: InvitationUpdate,
    ) -> Result<Invitation, AppError> {
        let sql = format!(
            "UPDATE invitations SET user_id = $2, organization_id = $3, expires_at = $4, \
             is_valid = $5, updated_at = now() WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invitation>(&sql)
            .bind(id)
            .bind(input.user_id)
            .bind(input.organization_id)
            .bind(input.expires_at)
            .bind(input.is_valid)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::from_write(e, LABELS.singular))?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }

    async fn delete(conn: &mut PgConnection, id: Uuid) -> Result<Invitation, AppError> {
        let sql = format!("DELETE FROM invitations WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Invitation>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::from_write(e, LABELS.singular))?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }
}
