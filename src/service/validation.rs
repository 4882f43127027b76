//! Field rules for request bodies.

use crate::error::AppError;
use regex::Regex;
use rust_decimal::Decimal;

/// A request body that can check its own field constraints.
pub trait Validate {
    /// Client-facing message when the body is rejected.
    const INVALID_MESSAGE: &'static str;

    fn validate(&self) -> Result<(), AppError>;
}

/// Required text: not blank, between `min` and `max` characters.
pub fn text(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    let len = value.chars().count();
    if len < min {
        return Err(AppError::Validation(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    if len > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

/// Optional text: when present, at most `max` characters.
pub fn optional_text(field: &str, value: Option<&str>, max: usize) -> Result<(), AppError> {
    match value {
        Some(v) if v.chars().count() > max => Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        ))),
        _ => Ok(()),
    }
}

pub fn pattern(field: &str, value: &str, pattern: &str) -> Result<(), AppError> {
    let re = Regex::new(pattern).map_err(|_| AppError::Internal(format!("invalid pattern for {}", field)))?;
    if !re.is_match(value) {
        return Err(AppError::Validation(format!("{} does not match required pattern", field)));
    }
    Ok(())
}

pub fn http_url(field: &str, value: &str) -> Result<(), AppError> {
    pattern(field, value, r"^https?://[^\s/$.?#][^\s]*$")
}

pub fn phone_number(field: &str, value: &str) -> Result<(), AppError> {
    pattern(field, value, r"^\+?[0-9][0-9 ()\-]{2,49}$")
}

/// A non-negative amount no larger than `max` with at most `scale` fractional digits.
pub fn amount(field: &str, value: Decimal, max: Decimal, scale: u32) -> Result<(), AppError> {
    if value < Decimal::ZERO || value > max {
        return Err(AppError::Validation(format!(
            "{} must be between 0 and {}",
            field, max
        )));
    }
    if value.normalize().scale() > scale {
        return Err(AppError::Validation(format!(
            "{} has more than {} decimal places",
            field, scale
        )));
    }
    Ok(())
}
