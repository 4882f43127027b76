use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Role scoped to one organization; grants permissions through `role_permission`.
#[derive(Debug, Clone, FromRow)]
pub struct Role {
    pub id: Uuid,
    pub role_name: String,
    pub organization_id: Uuid,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
