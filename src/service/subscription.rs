use super::{CrudService, Labels, Page};
use crate::error::AppError;
use crate::models::Subscription;
use crate::schemas::subscription::{SubscriptionCreate, SubscriptionResponse, SubscriptionUpdate, LABELS};
use async_trait::async_trait;
use sqlx::PgConnection;
use uuid::Uuid;

const COLUMNS: &str = "id, user_id, plan, is_active, start_date, end_date, created_at, updated_at";

#[async_trait]
impl CrudService for Subscription {
    const LABELS: Labels = LABELS;

    type Create = SubscriptionCreate;
    type Update = SubscriptionUpdate;
    type Response = SubscriptionResponse;

    async fn create(conn: &mut PgConnection, input: SubscriptionCreate) -> Result<Subscription, AppError> {
        let sql = format!(
            "INSERT INTO subscriptions (id, user_id, plan, is_active, start_date, end_date) \
             VALUES ($1, $2, $3, $4, COALESCE($5, now()), $6) RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, "create subscription");
        sqlx::query_as::<_, Subscription>(&sql)
            .bind(Uuid::new_v4())
            .bind(input.user_id)
            .bind(&input.plan)
            .bind(input.is_active)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(conn)
            .await
            .map_err(|e| AppError::from_insert(e, LABELS.singular))
    }

    async fn list(conn: &mut PgConnection, page: Page) -> Result<Vec<Subscription>, AppError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM subscriptions ORDER BY created_at, id LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Subscription>(&sql)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    async fn get(conn: &mut PgConnection, id: Uuid) -> Result<Subscription, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM subscriptions WHERE id = $1");
        sqlx::query_as::<_, Subscription>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }

    /// An omitted `start_date` keeps the stored one.
    async fn update(
        conn: &mut PgConnection,
        id: Uuid,
        input: SubscriptionUpdate,
    ) -> Result<Subscription, AppError> {
        let sql = format!(
            "UPDATE subscriptions SET user_id = $2, plan = $3, is_active = $4, \
             start_date = COALESCE($5, start_date), end_date = $6, updated_at = now() \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subscription>(&sql)
            .bind(id)
            .bind(input.user_id)
            .bind(&input.plan)
            .bind(input.is_active)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::from_write(e, LABELS.singular))?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }

    async fn delete(conn: &mut PgConnection, id: Uuid) -> Result<Subscription, AppError> {
        let sql = format!("DELETE FROM subscriptions WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Subscription>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::from_write(e, LABELS.singular))?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }
}
