//! Argument validators for untyped input.
//!
//! Arguments arriving as JSON (from the CLI `call` command or an embedding
//! application) are checked here before they reach the engines.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Describe a JSON value for an error message.
///
/// # Examples
///
/// ```
/// use dualpath::validate::describe;
/// use serde_json::json;
///
/// assert_eq!(describe(&json!(42)), "type number (42)");
/// assert_eq!(describe(&json!(null)), "null");
/// ```
#[must_use]
pub fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("type boolean ({b})"),
        Value::Number(n) => format!("type number ({n})"),
        Value::String(s) => format!("type string ('{s}')"),
        Value::Array(_) => "an instance of Array".to_string(),
        Value::Object(_) => "an instance of Object".to_string(),
    }
}

/// Require `value` to be a string.
///
/// # Errors
///
/// Returns [`Error::InvalidArgumentType`] naming `name` otherwise.
pub fn string<'a>(value: &'a Value, name: &str) -> Result<&'a str> {
    value.as_str().ok_or_else(|| Error::InvalidArgumentType {
        name: name.to_string(),
        expected: "string",
        actual: describe(value),
    })
}

/// Require `value` to be a plain key-value object.
///
/// # Errors
///
/// Returns [`Error::InvalidArgumentShape`] naming `name` otherwise.
pub fn object<'a>(value: &'a Value, name: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| Error::InvalidArgumentShape {
        name: name.to_string(),
        actual: describe(value),
    })
}

/// Require every element of `values` to be a string, naming failures by
/// position as `paths[i]`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgumentType`] for the first non-string element.
pub fn strings<'a>(values: &'a [Value], name: &str) -> Result<Vec<&'a str>> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| string(value, &format!("{name}[{i}]")))
        .collect()
}
