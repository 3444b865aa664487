//! Scalar rendering shared by the formatters.

use serde_json::{Number, Value};

/// Render a number the way the tool reads it: integral values carry no
/// fractional part (`1.0` → `1`).
pub fn format_number(n: f64) -> String {
    format!("{}", n)
}

/// Signed form used for offsets: `+N` / `-N`.
pub fn format_signed(n: f64) -> String {
    if n < 0.0 {
        format!("-{}", format_number(n.abs()))
    } else {
        format!("+{}", format_number(n.abs()))
    }
}

fn format_json_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(format_number).unwrap_or_else(|| n.to_string())
    }
}

/// String form of a JSON value. Strings are taken verbatim (no JSON quotes).
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => format_json_number(n),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Name of a JSON value's type, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Wrap a value in single quotes for the shell. Embedded quotes become `'\''`.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
