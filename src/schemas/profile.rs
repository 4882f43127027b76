use crate::error::AppError;
use crate::models::Profile;
use crate::service::validation::{self, Validate};
use crate::service::Labels;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const LABELS: Labels = Labels {
    singular: "Profile",
    plural: "Profiles",
    invalid: "Invalid profile details",
};

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileInput {
    pub user_id: Uuid,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

pub type ProfileCreate = ProfileInput;
pub type ProfileUpdate = ProfileInput;

impl Validate for ProfileInput {
    const INVALID_MESSAGE: &'static str = LABELS.invalid;

    fn validate(&self) -> Result<(), AppError> {
        validation::optional_text("bio", self.bio.as_deref(), 2000)?;
        if let Some(phone) = self.phone_number.as_deref() {
            validation::text("phone_number", phone, 3, 50)?;
            validation::phone_number("phone_number", phone)?;
        }
        if let Some(url) = self.avatar_url.as_deref() {
            validation::text("avatar_url", url, 1, 100)?;
            validation::http_url("avatar_url", url)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub bio: Option<String>,
    pub phone_number: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        ProfileResponse {
            id: p.id,
            user_id: p.user_id,
            bio: p.bio,
            phone_number: p.phone_number,
            avatar_url: p.avatar_url,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(phone: Option<&str>, avatar: Option<&str>) -> ProfileInput {
        ProfileInput {
            user_id: Uuid::new_v4(),
            bio: None,
            phone_number: phone.map(String::from),
            avatar_url: avatar.map(String::from),
        }
    }

    #[test]
    fn optional_contact_fields() {
        assert!(input(None, None).validate().is_ok());
        assert!(input(Some("+44 20 7946 0958"), Some("https://img.example/a.png")).validate().is_ok());
        assert!(input(Some("ring ring"), None).validate().is_err());
        assert!(input(None, Some("javascript:alert(1)")).validate().is_err());
        let long_url = format!("https://example.com/{}", "a".repeat(100));
        assert!(input(None, Some(&long_url)).validate().is_err());
    }
}
