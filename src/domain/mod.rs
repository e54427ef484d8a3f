pub mod admin;
pub mod mascota;
pub mod usuario;

use crate::utils::errors::ApiError;

// Shared required-field check for the model constructors: absent and empty
// values are both rejected, like a `required: true` schema rule.
pub(crate) fn require_field(value: Option<String>, name: &str) -> Result<String, ApiError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::InvalidData(format!("{} is required", name))),
    }
}
