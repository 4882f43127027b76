use crate::error::AppError;
use crate::models::Job;
use crate::service::validation::{self, Validate};
use crate::service::Labels;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const LABELS: Labels = Labels {
    singular: "Job",
    plural: "Jobs",
    invalid: "Invalid job listing",
};

/// Digits after the decimal point that NUMERIC(10, 2) keeps.
pub const SALARY_SCALE: u32 = 2;

/// Largest value NUMERIC(10, 2) can hold.
pub fn max_salary() -> Decimal {
    Decimal::new(9_999_999_999, SALARY_SCALE)
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobInput {
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    /// Accepts a JSON number or a decimal string.
    #[serde(default)]
    pub salary: Option<Decimal>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

pub type JobCreate = JobInput;
pub type JobUpdate = JobInput;

impl Validate for JobInput {
    const INVALID_MESSAGE: &'static str = LABELS.invalid;

    fn validate(&self) -> Result<(), AppError> {
        validation::text("title", &self.title, 1, 255)?;
        validation::text("description", &self.description, 1, 10_000)?;
        validation::optional_text("location", self.location.as_deref(), 255)?;
        validation::optional_text("job_type", self.job_type.as_deref(), 50)?;
        validation::optional_text("company_name", self.company_name.as_deref(), 255)?;
        if let Some(salary) = self.salary {
            validation::amount("salary", salary, max_salary(), SALARY_SCALE)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JobResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    #[serde(serialize_with = "rust_decimal::serde::float_option::serialize")]
    pub salary: Option<Decimal>,
    pub job_type: Option<String>,
    pub company_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Job> for JobResponse {
    fn from(j: Job) -> Self {
        JobResponse {
            id: j.id,
            user_id: j.user_id,
            title: j.title,
            description: j.description,
            location: j.location,
            salary: j.salary,
            job_type: j.job_type,
            company_name: j.company_name,
            created_at: j.created_at,
            updated_at: j.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn job(salary: serde_json::Value) -> JobInput {
        serde_json::from_value(serde_json::json!({
            "user_id": Uuid::new_v4(),
            "title": "Backend engineer",
            "description": "Build APIs",
            "salary": salary,
        }))
        .unwrap()
    }

    #[test]
    fn salary_must_fit_the_column() {
        assert!(job(serde_json::json!(120_000.5)).validate().is_ok());
        assert!(job(serde_json::json!("99999999.99")).validate().is_ok());
        assert!(job(serde_json::json!(-1)).validate().is_err());
        assert!(job(serde_json::json!("100000000.00")).validate().is_err());
    }

    #[test]
    fn sub_cent_salaries_are_rejected_not_rounded() {
        let input = job(serde_json::json!(12.345));
        assert_eq!(input.salary, Some(Decimal::from_str("12.345").unwrap()));
        assert!(input.validate().is_err());
        assert!(job(serde_json::json!("12.3400")).validate().is_ok());
    }

    #[test]
    fn salary_is_serialized_as_a_number() {
        let response = JobResponse {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "t".into(),
            description: "d".into(),
            location: None,
            salary: Some(Decimal::new(123450, 2)),
            job_type: None,
            company_name: None,
            created_at: None,
            updated_at: None,
        };
        let v = serde_json::to_value(response).unwrap();
        assert_eq!(v["salary"], serde_json::json!(1234.5));
    }
}
