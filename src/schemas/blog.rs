use crate::error::AppError;
use crate::models::Blog;
use crate::service::validation::{self, Validate};
use crate::service::Labels;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const LABELS: Labels = Labels {
    singular: "Blog",
    plural: "Blogs",
    invalid: "Invalid blog post",
};

#[derive(Debug, Clone, Deserialize)]
pub struct BlogInput {
    pub author_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
}

pub type BlogCreate = BlogInput;
pub type BlogUpdate = BlogInput;

impl Validate for BlogInput {
    const INVALID_MESSAGE: &'static str = LABELS.invalid;

    fn validate(&self) -> Result<(), AppError> {
        validation::text("title", &self.title, 1, 100)?;
        if let Some(url) = self.image_url.as_deref() {
            validation::text("image_url", url, 1, 100)?;
            validation::http_url("image_url", url)?;
        }
        for tag in &self.tags {
            validation::text("tags", tag, 1, 20)?;
        }
        validation::optional_text("excerpt", self.excerpt.as_deref(), 500)
    }
}

/// `is_deleted` is not exposed: deleted posts are never returned.
#[derive(Debug, Clone, Serialize)]
pub struct BlogResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub excerpt: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Blog> for BlogResponse {
    fn from(b: Blog) -> Self {
        BlogResponse {
            id: b.id,
            author_id: b.author_id,
            title: b.title,
            content: b.content,
            image_url: b.image_url,
            tags: b.tags,
            excerpt: b.excerpt,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}
