use serde_json::Value;

use crate::domain::ContactFields;
use crate::errors::AppError;

pub const MISSING_PAYLOAD: &str = "JSON data required";

pub fn validate_name(name: Option<&str>) -> bool {
    // Must be present and non-empty, any characters allowed
    name.is_some_and(|name| !name.is_empty())
}

/// Rejects creation data lacking a first or last name.
///
/// `nombre` is checked before `apellido`, so a payload missing both reports
/// `nombre`.
pub fn require_names(fields: &ContactFields) -> Result<(), AppError> {
    if !validate_name(fields.first_name.as_deref()) {
        return Err(AppError::Validation("Field nombre is required".to_string()));
    }
    if !validate_name(fields.last_name.as_deref()) {
        return Err(AppError::Validation(
            "Field apellido is required".to_string(),
        ));
    }
    Ok(())
}

/// Parses a request body into contact fields.
///
/// A blank body or any falsy JSON value (`null`, `false`, `0`, `""`, `[]`,
/// `{}`) counts as no data at all. Any other value that is not an object,
/// or an object whose recognised keys hold non-string values, is a `Json`
/// error.
pub fn parse_payload(body: &[u8]) -> Result<ContactFields, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::Validation(MISSING_PAYLOAD.to_string()));
    }

    let value: Value = serde_json::from_slice(body)?;

    if is_falsy(&value) {
        return Err(AppError::Validation(MISSING_PAYLOAD.to_string()));
    }

    match value {
        Value::Object(map) => Ok(serde_json::from_value(Value::Object(map))?),
        other => Err(AppError::Json(serde::de::Error::invalid_type(
            unexpected(&other),
            &"a JSON object",
        ))),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn unexpected(value: &Value) -> serde::de::Unexpected<'_> {
    use serde::de::Unexpected;

    match value {
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Null | Value::Object(_) => Unexpected::Other("value"),
    }
}
