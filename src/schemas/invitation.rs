use super::default_true;
use crate::error::AppError;
use crate::models::Invitation;
use crate::service::validation::Validate;
use crate::service::Labels;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const LABELS: Labels = Labels {
    singular: "Invitation",
    plural: "Invitations",
    invalid: "Invalid invitation details",
};

#[derive(Debug, Clone, Deserialize)]
pub struct InvitationCreate {
    pub user_id: Uuid,
    pub organization_id: Uuid,
    pub expires_at: DateTime<Utc>,
    #[serde(default = "default_true")]
    pub is_valid: bool,
}

impl Validate for InvitationCreate {
    const INVALID_MESSAGE: &'static str = LABELS.invalid;

    fn validate(&self) -> Result<(), AppError> {
        if self.expires_at <= Utc::now() {
            return Err(AppError::Validation("expires_at must be in the future".into()));
        }
        Ok(())
    }
}

/// Full replacement. An expiry in the past is allowed here so that an
/// invitation can be expired early.
#[derive(Debug, Clone, Deserialize)]
pub struct InvitationUpdate {
    pub user_id: Uuid,
    pub organization_id: Uuid,
    pub expires_at: DateTime<Utc>,
    #[serde(default = "default_true")]
    pub is_valid: bool,
}

impl Validate for InvitationUpdate {
    const INVALID_MESSAGE: &'static str = LABELS.invalid;

    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InvitationResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub organization_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub is_valid: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Invitation> for InvitationResponse {
    fn from(i: Invitation) -> Self {
        InvitationResponse {
            id: i.id,
            user_id: i.user_id,
            organization_id: i.organization_id,
            expires_at: i.expires_at,
            is_valid: i.is_valid,
            created_at: i.created_at,
            updated_at: i.updated_at,
        }
    }
}
