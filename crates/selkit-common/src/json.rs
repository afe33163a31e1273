//! JSON serialization helpers.
//!
//! Thin wrappers over `serde_json` so callers deal with one error type.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Error raised by the JSON helpers.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The value could not be turned into JSON.
    #[error("failed to serialize to JSON: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The input was not valid JSON, or did not describe a valid value.
    #[error("failed to deserialize from JSON: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Serialize `value` to a compact JSON string.
///
/// # Errors
///
/// Returns [`JsonError::Serialize`] if `value`'s `Serialize` impl fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Serialize)
}

/// Serialize `value` to an indented JSON string.
///
/// # Errors
///
/// Returns [`JsonError::Serialize`] if `value`'s `Serialize` impl fails.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string_pretty(value).map_err(JsonError::Serialize)
}

/// Deserialize a value of type `T` from JSON text.
///
/// # Errors
///
/// Returns [`JsonError::Deserialize`] on malformed JSON or when the value's
/// own `Deserialize` impl rejects it.
pub fn from_json<T: DeserializeOwned>(input: &str) -> Result<T, JsonError> {
    serde_json::from_str(input).map_err(JsonError::Deserialize)
}
