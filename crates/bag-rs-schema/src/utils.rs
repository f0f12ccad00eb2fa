//! Path and value helpers shared by the compiler and normalizer.

use serde_json::Value;

/// Label used in errors for the top level of a declaration or config.
pub(crate) const ROOT_PATH: &str = "root";

/// Join nested paths for better error messages.
pub(crate) fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Render a dotted path for errors, naming the empty path `root`.
pub(crate) fn location(path: &str) -> String {
    if path.is_empty() {
        ROOT_PATH.to_string()
    } else {
        path.to_string()
    }
}

/// Short name of a JSON value's kind.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
