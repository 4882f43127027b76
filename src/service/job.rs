use super::{CrudService, Labels, Page};
use crate::error::AppError;
use crate::models::Job;
use crate::schemas::job::{JobCreate, JobResponse, JobUpdate, LABELS};
use async_trait::async_trait;
use sqlx::PgConnection;
use uuid::Uuid;

const COLUMNS: &str =
    "id, user_id, title, description, location, salary, job_type, company_name, created_at, updated_at";

#[async_trait]
impl CrudService for Job {
    const LABELS: Labels = LABELS;

    type Create = JobCreate;
    type Update = JobUpdate;
    type Response = JobResponse;

    async fn create(conn: &mut PgConnection, input: JobCreate) -> Result<Job, AppError> {
        let sql = format!(
            "INSERT INTO jobs (id, user_id, title, description, location, salary, job_type, company_name) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, "create job");
        sqlx::query_as::<_, Job>(&sql)
            .bind(Uuid::new_v4())
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.salary)
            .bind(&input.job_type)
            .bind(&input.company_name)
            .fetch_one(conn)
            .await
            .map_err(|e| AppError::from_insert(e, LABELS.singular))
    }

    async fn list(conn: &mut PgConnection, page: Page) -> Result<Vec<Job>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM jobs ORDER BY created_at, id LIMIT $1 OFFSET $2");
        let rows = sqlx::query_as::<_, Job>(&sql)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    async fn get(conn: &mut PgConnection, id: Uuid) -> Result<Job, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM jobs WHERE id = $1");
        sqlx::query_as::<_, Job>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }

    async fn update(conn: &mut PgConnection, id: Uuid, input: JobUpdate) -> Result<Job, AppError> {
        let sql = format!(
            "UPDATE jobs SET user_id = $2, title = $3, description = $4, location = $5, \
             salary = $6, job_type = $7, company_name = $8, updated_at = now() \
             WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&sql)
            .bind(id)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.salary)
            .bind(&input.job_type)
            .bind(&input.company_name)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::from_write(e, LABELS.singular))?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }

    async fn delete(conn: &mut PgConnection, id: Uuid) -> Result<Job, AppError> {
        let sql = format!("DELETE FROM jobs WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Job>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::from_write(e, LABELS.singular))?
            .ok_or_else(|| AppError::not_found(LABELS.singular, id))
    }
}
