//! Face descriptor validation and text encoding.
//!
//! A descriptor is the 128-dimensional face embedding computed by the
//! capturing client. This service never compares descriptors; it only checks
//! their shape before storing them and again when reading them back, since
//! the `descriptor` column is plain text and may have been edited out of band.
//!
//! Clients send descriptors either as a JSON array or as that array already
//! serialized into a string. Both forms are accepted everywhere.

use serde_json::Value;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of components in a face descriptor.
pub const DESCRIPTOR_LENGTH: usize = 128;

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Returns `true` iff `value` is (or deserializes to) an array of exactly
/// [`DESCRIPTOR_LENGTH`] numbers.
///
/// Strings are deserialized one level deep; a string holding another string
/// is rejected. `null` and every other JSON type yield `false`.
pub fn is_valid(value: &Value) -> bool {
    parse(value).is_some()
}

/// Extract the descriptor components from a JSON value, or `None` when the
/// value does not hold a well-formed descriptor.
pub fn parse(value: &Value) -> Option<Vec<f64>> {
    match value {
        Value::String(text) => decode_stored(text),
        other => components(other),
    }
}

/// Decode a descriptor from its stored text form.
pub fn decode_stored(text: &str) -> Option<Vec<f64>> {
    let value: Value = serde_json::from_str(text).ok()?;
    components(&value)
}

fn components(value: &Value) -> Option<Vec<f64>> {
    let items = value.as_array()?;
    if items.len() != DESCRIPTOR_LENGTH {
        return None;
    }
    items.iter().map(Value::as_f64).collect()
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

/// Validate an optional descriptor from a request body.
///
/// `None` and JSON `null` both mean "no descriptor supplied" and return
/// `Ok(None)`. Anything else must be a well-formed descriptor.
pub fn require_valid(value: Option<&Value>) -> Result<Option<Vec<f64>>, CoreError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => parse(v).map(Some).ok_or_else(|| {
            CoreError::Validation(format!(
                "Invalid descriptor: expected an array of {DESCRIPTOR_LENGTH} numbers"
            ))
        }),
    }
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Serialize descriptor components into the text form kept in the
/// `descriptor` column.
pub fn encode(components: &[f64]) -> Result<String, CoreError> {
    serde_json::to_string(components)
        .map_err(|e| CoreError::Internal(format!("Failed to encode descriptor: {e}")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
