//! Parse-or-default coercion of loosely typed JSON values.
//!
//! None of these functions can fail: a value that does not convert yields
//! the field default instead of an error.

use serde_json::{Number, Value};

/// Coerce a JSON value to `f64`, falling back to `0.0`.
///
/// Numbers pass through, strings are trimmed and parsed (integers, decimals,
/// exponents, `inf`, `nan`), booleans map to `1.0` / `0.0`. Everything else,
/// including a missing value, is `0.0`.
///
/// Number literals beyond the `f64` range keep their JSON text: decimal or
/// exponent forms saturate to infinity, integer forms fall back to `0.0`.
pub fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if f.is_finite() => f,
            _ => out_of_range_number(n),
        },
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

fn out_of_range_number(n: &Number) -> f64 {
    let text = n.to_string();
    if !text.contains(['.', 'e', 'E']) {
        return 0.0;
    }
    text.parse::<f64>().unwrap_or(0.0)
}

/// Coerce a JSON value to `i64`, truncating toward zero.
///
/// Non-finite and out-of-range values become `0`.
pub fn coerce_integer(value: Option<&Value>) -> i64 {
    if let Some(Value::Number(n)) = value {
        if let Some(i) = n.as_i64() {
            return i;
        }
    }

    let f = coerce_number(value).trunc();
    if f.is_finite() && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        f as i64
    } else {
        0
    }
}

/// Coerce a JSON value to text, falling back to an empty string.
///
/// Strings are taken as-is; numbers and booleans use their JSON rendering.
pub fn coerce_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
