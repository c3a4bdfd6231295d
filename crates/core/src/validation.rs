//! Input validation for request payloads.
//!
//! Each helper returns [`CoreError::Validation`] with the exact message shown
//! to API clients, so handlers can forward errors with `?`.

use chrono::{DateTime, NaiveDate};
use validator::ValidateEmail;

use crate::error::CoreError;
use crate::types::TrainingDate;

/// Reject blank values. `label` is the human-readable field name, e.g. `"Username"`.
pub fn require_non_empty(value: &str, label: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{label} cannot be empty")));
    }
    Ok(())
}

/// Reject strings that are not syntactically valid email addresses.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.validate_email() {
        return Err(CoreError::Validation("Invalid email format".into()));
    }
    Ok(())
}

/// Parse a training date from either an RFC 3339 timestamp or a plain
/// `YYYY-MM-DD` date. Timestamps keep the calendar day of their own offset.
pub fn parse_training_date(raw: &str) -> Result<TrainingDate, CoreError> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| CoreError::Validation(format!("Invalid date format: {e}")))
}

/// Validate the numeric fields of a set entry.
pub fn validate_set_values(set_number: i32, weight: f64, reps: i32) -> Result<(), CoreError> {
    if set_number < 1 {
        return Err(CoreError::Validation(
            "set_number must be a positive integer".into(),
        ));
    }
    if !weight.is_finite() || weight < 0.0 {
        return Err(CoreError::Validation(
            "weight must be a non-negative number".into(),
        ));
    }
    if reps < 1 {
        return Err(CoreError::Validation("reps must be a positive integer".into()));
    }
    Ok(())
}
