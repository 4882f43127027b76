use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Blog post. Deletion is soft: `is_deleted` hides the row from the API.
#[derive(Debug, Clone, FromRow)]
pub struct Blog {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub is_deleted: bool,
    pub excerpt: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
