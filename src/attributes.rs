//! Product attribute lists
//!
//! Sizes and colors are stored as text. Depending on which admin tool wrote the row the
//! text is a JSON array, a JSON string, or a plain space-separated list.

use serde_json::Value;

/// Decode a stored attribute list.
///
/// JSON is tried first. Anything that does not parse as JSON is split on whitespace.
/// Empty input, `null` and empty strings decode to an empty list.
#[must_use]
pub fn decode_attribute_list(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Vec::new();
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(values)) => values.into_iter().filter_map(scalar_to_string).collect(),
        Ok(Value::String(value)) => split_words(&value),
        Ok(Value::Null) => Vec::new(),
        Ok(other) => scalar_to_string(other).into_iter().collect(),
        Err(_not_json) => split_words(raw),
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn split_words(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}
