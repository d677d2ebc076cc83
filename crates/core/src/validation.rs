//! Request-body checks shared by every resource manager.
//!
//! Bodies arrive as loosely typed JSON objects. Before a body is turned into
//! a typed input struct it goes through two gates, in order:
//!
//! 1. [`ensure_body`] -- the body must not be empty.
//! 2. [`require_fields`] -- every required field must be present and truthy.
//!
//! Truthiness follows loose JSON semantics: `null`, `false`, `0` and `""`
//! all count as missing. Required fields in this service are non-empty
//! strings or references, so the distinction never matters in practice.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::RecordId;

/// A request body as decoded from JSON, before typing.
pub type JsonObject = Map<String, Value>;

/// Loose truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Fail with [`CoreError::EmptyBody`] when `body` has no keys.
pub fn ensure_body(body: &JsonObject, message: &str) -> Result<(), CoreError> {
    if body.is_empty() {
        return Err(CoreError::EmptyBody(message.to_string()));
    }
    Ok(())
}

/// Names of the `required` fields that are absent or falsy in `body`.
pub fn missing_fields<'a>(body: &JsonObject, required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|field| !body.get(*field).is_some_and(is_truthy))
        .collect()
}

/// Fail with [`CoreError::MissingFields`] when any `required` field is
/// absent or falsy.
///
/// An empty body is also rejected, so callers that skip [`ensure_body`]
/// still get a 400.
pub fn require_fields(body: &JsonObject, required: &[&str], message: &str) -> Result<(), CoreError> {
    if body.is_empty() || !missing_fields(body, required).is_empty() {
        return Err(CoreError::MissingFields(message.to_string()));
    }
    Ok(())
}

/// Deserialize a checked body into its typed input struct.
///
/// Type mismatches and enum violations become [`CoreError::Validation`].
pub fn parse_body<T: DeserializeOwned>(body: JsonObject) -> Result<T, CoreError> {
    serde_json::from_value(Value::Object(body)).map_err(|e| CoreError::Validation(e.to_string()))
}

/// Run the ID-shape check on a path parameter.
///
/// `message` is the resource-specific text reported on failure, e.g.
/// `"Invalid project ID"`.
pub fn parse_id(candidate: &str, message: &str) -> Result<RecordId, CoreError> {
    RecordId::parse(candidate).ok_or_else(|| CoreError::InvalidId(message.to_string()))
}

/// Fail with [`CoreError::Validation`] if a stored string field is blank.
pub fn ensure_not_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("Path `{field}` is required.")));
    }
    Ok(())
}
