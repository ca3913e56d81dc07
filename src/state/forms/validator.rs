//! Field-level validation rules

use super::schema::FormField;
use super::value::FieldValue;

/// Message used when a required field is empty and the schema has no override
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Validate one value against its field definition.
///
/// Rules are checked in order and the first failure wins: required, then
/// minimum length, then maximum length. Length limits only apply to text
/// values, and a limit of zero counts as unset.
pub fn validate(field: &FormField, value: &FieldValue) -> Option<String> {
    if field.required && value.is_empty() {
        return Some(
            field
                .validation_message()
                .unwrap_or(REQUIRED_MESSAGE)
                .to_string(),
        );
    }

    let len = value.char_len()?;

    if let Some(min) = field.min_length.filter(|n| *n > 0) {
        if len < min {
            return Some(format!("Minimum length is {min}"));
        }
    }

    if let Some(max) = field.max_length.filter(|n| *n > 0) {
        if len > max {
            return Some(format!("Maximum length is {max}"));
        }
    }

    None
}
