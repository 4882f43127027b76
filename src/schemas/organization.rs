use crate::error::AppError;
use crate::models::Organization;
use crate::service::validation::{self, Validate};
use crate::service::Labels;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const LABELS: Labels = Labels {
    singular: "Organization",
    plural: "Organizations",
    invalid: "Invalid organization name or description",
};

#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

pub type OrganizationCreate = OrganizationInput;
pub type OrganizationUpdate = OrganizationInput;

impl Validate for OrganizationInput {
    const INVALID_MESSAGE: &'static str = LABELS.invalid;

    fn validate(&self) -> Result<(), AppError> {
        validation::text("name", &self.name, 1, 50)?;
        validation::optional_text("description", self.description.as_deref(), 1000)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrganizationResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Organization> for OrganizationResponse {
    fn from(o: Organization) -> Self {
        OrganizationResponse {
            id: o.id,
            name: o.name,
            description: o.description,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}
