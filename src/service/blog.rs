//! Blog posts. Deleted posts keep their row with `is_deleted` set and are
//! invisible to every read and write afterwards.

use super::{CrudService, Labels, Page};
use crate::error::AppError;
use crate::models::Blog;
use crate::schemas::blog::{BlogCreate, BlogResponse, BlogUpdate, LABELS};
use async_trait::async_trait;
use sqlx::PgConnection;
use uuid::Uuid;

const COLUMNS: &str =
    "id, author_id, title, content, image_url, tags::text[] AS tags, is_deleted, excerpt, created_at, updated_at";

#[async_trait]
impl CrudService for Blog {
    const LABELS: Labels = LABELS;

    type Create = BlogCreate;
    type Update = BlogUpdate;
    type Response = BlogResponse;

    async fn create(conn: &mut PgConnection, input: BlogCreate) -> Result<Blog, AppError> {
        let sql = format!(
            "INSERT INTO blogs (id, author_id, title, content, image_url, tags, excerpt) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, "create blog");
        sqlx::query_as::<_, Blog>(&sql)
            .bind(Uuid::new_v4())
            .bind(input.author_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.image_url)
            .bind(&input.tags)
            .bind(&input.excerpt)
            .fetch_one(conn)
            .await
            .map_err(|e| AppError::from_insert(e, LABELS.singular))
    }

    async fn list(conn: &mut PgConnection, page: Page) -> Result<Vec<Blog>, AppError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM blogs WHERE NOT is_deleted \
             ORDER BY created_at, id LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Blog>(&sql)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    async fn get(conn: &mut PgConnection, id: Uuid) -> Result<Blog, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM blogs WHERE id = $1 AND NOT is_deleted");
        sqlx::query_as::<_, Blog>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }

    async fn update(conn: &mut PgConnection, id: Uuid, input: BlogUpdate) -> Result<Blog, AppError> {
        let sql = format!(
            "UPDATE blogs SET author_id = $2, title = $3, content = $4, image_url = $5, tags = $6, \
             excerpt = $7, updated_at = now() WHERE id = $1 AND NOT is_deleted RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Blog>(&sql)
            .bind(id)
            .bind(input.author_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.image_url)
            .bind(&input.tags)
            .bind(&input.excerpt)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::from_write(e, LABELS.singular))?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }

    async fn delete(conn: &mut PgConnection, id: Uuid) -> Result<Blog, AppError> {
        let sql = format!(
            "UPDATE blogs SET is_deleted = true, updated_at = now() \
             WHERE id = $1 AND NOT is_deleted RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Blog>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::from_write(e, LABELS.singular))?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }
}
