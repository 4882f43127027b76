use super::default_true;
use crate::error::AppError;
use crate::models::Role;
use crate::service::validation::{self, Validate};
use crate::service::Labels;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const LABELS: Labels = Labels {
    singular: "Role",
    plural: "Roles",
    invalid: "Invalid role name or organization",
};

#[derive(Debug, Clone, Deserialize)]
pub struct RoleInput {
    pub role_name: String,
    pub organization_id: Uuid,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

pub type RoleCreate = RoleInput;
pub type RoleUpdate = RoleInput;

impl Validate for RoleInput {
    const INVALID_MESSAGE: &'static str = LABELS.invalid;

    fn validate(&self) -> Result<(), AppError> {
        validation::text("role_name", &self.role_name, 1, 50)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleResponse {
    pub id: Uuid,
    pub role_name: String,
    pub organization_id: Uuid,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Role> for RoleResponse {
    fn from(r: Role) -> Self {
        RoleResponse {
            id: r.id,
            role_name: r.role_name,
            organization_id: r.organization_id,
            is_active: r.is_active,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}
