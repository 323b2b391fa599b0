//! Presence checks for request body fields.

use crate::server::error::api::ApiError;

/// Returns the value of a required string field, rejecting absent or blank values.
pub fn required_field(value: Option<String>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::missing_field(field)),
    }
}
