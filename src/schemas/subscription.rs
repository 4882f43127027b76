use super::default_true;
use crate::error::AppError;
use crate::models::Subscription;
use crate::service::validation::{self, Validate};
use crate::service::Labels;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const LABELS: Labels = Labels {
    singular: "Subscription",
    plural: "Subscriptions",
    invalid: "Invalid subscription details",
};

#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionInput {
    pub user_id: Uuid,
    pub plan: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Defaults to the insertion time when omitted.
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}

pub type SubscriptionCreate = SubscriptionInput;
pub type SubscriptionUpdate = SubscriptionInput;

impl Validate for SubscriptionInput {
    const INVALID_MESSAGE: &'static str = LABELS.invalid;

    fn validate(&self) -> Result<(), AppError> {
        validation::text("plan", &self.plan, 1, 50)?;
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end <= start {
                return Err(AppError::Validation("end_date must be after start_date".into()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub plan: String,
    pub is_active: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Subscription> for SubscriptionResponse {
    fn from(s: Subscription) -> Self {
        SubscriptionResponse {
            id: s.id,
            user_id: s.user_id,
            plan: s.plan,
            is_active: s.is_active,
            start_date: s.start_date,
            end_date: s.end_date,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}
