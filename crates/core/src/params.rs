//! Typed extraction of attribute values from `serde_json::Value`.
//!
//! Each helper takes the attribute name (for error reporting) and the raw
//! JSON value, and either returns the typed value or an `EngineError`
//! describing why it was rejected. Callers keep their previous value on error.

use crate::error::EngineError;
use serde_json::Value;

/// Human-readable JSON type name used in mismatch errors.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_u64() || n.is_i64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(name: &str, expected: &str, value: &Value) -> EngineError {
    EngineError::ParamTypeMismatch {
        name: name.to_owned(),
        expected: expected.to_owned(),
        got: json_type_name(value).to_owned(),
    }
}

/// Extracts a finite `f64`. Integers are accepted and widened.
pub fn expect_f64(name: &str, value: &Value) -> Result<f64, EngineError> {
    let v = value
        .as_f64()
        .ok_or_else(|| mismatch(name, "number", value))?;
    if !v.is_finite() {
        return Err(EngineError::invalid(name, "must be finite"));
    }
    Ok(v)
}

/// Extracts a non-negative integer no smaller than `min`.
///
/// Floats (even integral ones such as `2.0`) are rejected as a type mismatch.
pub fn expect_usize(name: &str, value: &Value, min: usize) -> Result<usize, EngineError> {
    let v = value
        .as_u64()
        .ok_or_else(|| mismatch(name, "integer", value))?;
    let v = usize::try_from(v).map_err(|_| EngineError::invalid(name, "too large"))?;
    if v < min {
        return Err(EngineError::invalid(name, format!("must be at least {min}")));
    }
    Ok(v)
}

/// Extracts a string slice.
pub fn expect_str<'a>(name: &str, value: &'a Value) -> Result<&'a str, EngineError> {
    value.as_str().ok_or_else(|| mismatch(name, "string", value))
}
