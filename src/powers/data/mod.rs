/// Data transforms over JSON values: flatten/unflatten, deep merge, group-by,
/// key-case rewriting and JSON↔CSV conversion.
pub mod flatten;
pub mod group;
pub mod keys;
pub mod merge;
pub mod tabular;

pub use flatten::{DEFAULT_SEPARATOR, flatten, unflatten};
pub use group::group_by;
pub use keys::{KeyCase, transform_keys};
pub use merge::deep_merge;
pub use tabular::{csv_to_json, json_to_csv};

use serde_json::{Map, Value};

use super::errors::{PowerError, json_type_name};

/// Borrow `value` as a JSON object, or report what was found instead.
///
/// # Errors
///
/// Returns `PowerError::InvalidInput` for any non-object value.
pub fn expect_object(value: &Value) -> Result<&Map<String, Value>, PowerError> {
    value.as_object().ok_or_else(|| PowerError::InvalidInput {
        expected: "a JSON object",
        found: json_type_name(value),
    })
}

/// Parse `text` as a JSON object.
///
/// # Errors
///
/// Returns `PowerError::InvalidJson` on malformed input and
/// `PowerError::InvalidInput` when the document is not an object.
pub fn parse_object(text: &str) -> Result<Map<String, Value>, PowerError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Object(map) => Ok(map),
        other => Err(PowerError::InvalidInput {
            expected: "a JSON object",
            found: json_type_name(&other),
        }),
    }
}

/// Parse `text` as a JSON array.
///
/// # Errors
///
/// Returns `PowerError::InvalidJson` on malformed input and
/// `PowerError::InvalidInput` when the document is not an array.
pub fn parse_array(text: &str) -> Result<Vec<Value>, PowerError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(items) => Ok(items),
        other => Err(PowerError::InvalidInput {
            expected: "a JSON array",
            found: json_type_name(&other),
        }),
    }
}
