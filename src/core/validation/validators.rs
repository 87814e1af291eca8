//! Reusable field validators
//!
//! Each helper reads one key out of a JSON object and checks its type,
//! turning a mismatch into the matching [`ValidationError`].

use crate::core::error::ValidationError;
use serde_json::{Map, Value};

/// The body must be a JSON object
pub fn require_object(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
    value.as_object().ok_or(ValidationError::MalformedBody)
}

/// Field must be present and hold a string
pub fn required_string<'a>(
    fields: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match fields.get(field) {
        None => Err(ValidationError::MissingField { field }),
        Some(value) => value.as_str().ok_or(ValidationError::InvalidType {
            field,
            expected: "string",
        }),
    }
}

/// Field may be absent or null; otherwise it must hold a string
pub fn optional_string<'a>(
    fields: &'a Map<String, Value>,
    field: &'static str,
) -> Result<Option<&'a str>, ValidationError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_str().map(Some).ok_or(ValidationError::InvalidType {
            field,
            expected: "string",
        }),
    }
}

/// Field may be absent or null; otherwise it must hold an integer
pub fn optional_integer(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<i64>, ValidationError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_i64().map(Some).ok_or(ValidationError::InvalidType {
            field,
            expected: "integer",
        }),
    }
}

/// Field may be absent or null; otherwise it must hold a boolean
pub fn optional_bool(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<bool>, ValidationError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_bool().map(Some).ok_or(ValidationError::InvalidType {
            field,
            expected: "boolean",
        }),
    }
}

/// String must not exceed `max` characters
///
/// On failure returns `(max, actual)` so callers can pick their own error.
pub fn max_chars(value: &str, max: usize) -> Result<(), (usize, usize)> {
    let len = value.chars().count();
    if len > max { Err((max, len)) } else { Ok(()) }
}
