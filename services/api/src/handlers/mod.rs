pub mod auth;
pub mod resume;
pub mod user;

use crate::error::ApiError;

/// Presence check for required body fields. Absent and blank both read as
/// "not provided".
fn required(field: Option<String>, name: &str) -> Result<String, ApiError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::Validation(format!("{name} is required"))),
    }
}
