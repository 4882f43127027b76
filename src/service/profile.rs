use super::{CrudService, Labels, Page};
use crate::error::AppError;
use crate::models::Profile;
use crate::schemas::profile::{ProfileCreate, ProfileResponse, ProfileUpdate, LABELS};
use async_trait::async_trait;
use sqlx::PgConnection;
use uuid::Uuid;

const COLUMNS: &str = "id, user_id, bio, phone_number, avatar_url, created_at, updated_at";

#[async_trait]
impl CrudService for Profile {
    const LABELS: Labels = LABELS;

    type Create = ProfileCreate;
    type Update = ProfileUpdate;
    type Response = ProfileResponse;

    /// A second profile for the same user is a conflict.
    async fn create(conn: &mut PgConnection, input: ProfileCreate) -> Result<Profile, AppError> {
        let sql = format!(
            "INSERT INTO profiles (id, user_id, bio, phone_number, avatar_url) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, "create profile");
        sqlx::query_as::<_, Profile>(&sql)
            .bind(Uuid::new_v4())
            .bind(input.user_id)
            .bind(&input.bio)
            .bind(&input.phone_number)
            .bind(&input.avatar_url)
            .fetch_one(conn)
            .await
            .map_err(|e| AppError::from_insert(e, LABELS.singular))
    }

    async fn list(conn: &mut PgConnection, page: Page) -> Result<Vec<Profile>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM profiles ORDER BY created_at, id LIMIT $1 OFFSET $2");
        let rows = sqlx::query_as::<_, Profile>(&sql)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    async fn get(conn: &mut PgConnection, id: Uuid) -> Result<Profile, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }

    async fn update(conn: &mut PgConnection, id: Uuid, input: ProfileUpdate) -> Result<Profile, AppError> {
        let sql = format!(
            "UPDATE profiles SET user_id = $2, bio = $3, phone_number = $4, avatar_url = $5, \
             updated_at = now() WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&sql)
            .bind(id)
            .bind(input.user_id)
            .bind(&input.bio)
            .bind(&input.phone_number)
            .bind(&input.avatar_url)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::from_write(e, LABELS.singular))?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }

    async fn delete(conn: &mut PgConnection, id: Uuid) -> Result<Profile, AppError> {
        let sql = format!("DELETE FROM profiles WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Profile>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::from_write(e, LABELS.singular))?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }
}
