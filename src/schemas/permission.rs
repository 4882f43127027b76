use crate::error::AppError;
use crate::models::Permission;
use crate::service::validation::{self, Validate};
use crate::service::Labels;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const LABELS: Labels = Labels {
    singular: "Permission",
    plural: "Permissions",
    invalid: "Invalid permission name or description format",
};

#[derive(Debug, Clone, Deserialize)]
pub struct PermissionInput {
    pub name: String,
    pub description: String,
}

pub type PermissionCreate = PermissionInput;
/// Full replacement; same required fields as create.
pub type PermissionUpdate = PermissionInput;

impl Validate for PermissionInput {
    const INVALID_MESSAGE: &'static str = LABELS.invalid;

    fn validate(&self) -> Result<(), AppError> {
        validation::text("name", &self.name, 1, 50)?;
        validation::text("description", &self.description, 1, 100)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PermissionResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Permission> for PermissionResponse {
    fn from(p: Permission) -> Self {
        PermissionResponse {
            id: p.id,
            name: p.name,
            description: p.description,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
