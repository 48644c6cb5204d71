//! JSON request-body construction and required-field validation

use serde::Serialize;

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};

/// A type that can render itself as a JSON request body.
///
/// Implementations validate required fields before serializing, so a
/// malformed options struct fails with [`Error::Validation`] before any
/// HTTP call is attempted.
pub trait ToRequestBody {
    /// Render the request body, validating fields first
    fn to_request_body(&self) -> Result<JsonValue>;
}

/// Serialize a value into a JSON body.
///
/// Serialization failures are programmer errors and map to
/// [`Error::Encoding`].
pub fn to_body<T: Serialize>(value: &T) -> Result<JsonValue> {
    serde_json::to_value(value).map_err(|e| Error::encoding(e.to_string()))
}

/// Nest a body under a named wrapper key, e.g. `{"messages": [...]}`.
pub fn wrap(key: &str, body: JsonValue) -> JsonValue {
    let mut map = JsonObject::new();
    map.insert(key.to_string(), body);
    JsonValue::Object(map)
}

/// Require a nonzero integer field.
///
/// Zero means "unset" on the wire, matching the service's treatment of
/// absent numeric fields.
pub fn require_nonzero(field: &str, value: i64) -> Result<()> {
    if value == 0 {
        Err(Error::validation(field))
    } else {
        Ok(())
    }
}

/// Require a non-empty string field.
pub fn require_str(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        Err(Error::validation(field))
    } else {
        Ok(())
    }
}

/// Require a JSON value that is present (not `null`).
pub fn require_value(field: &str, value: &JsonValue) -> Result<()> {
    if value.is_null() {
        Err(Error::validation(field))
    } else {
        Ok(())
    }
}
