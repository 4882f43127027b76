use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Tenant. Deleting one removes its roles, invitations and memberships.
#[derive(Debug, Clone, FromRow)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
