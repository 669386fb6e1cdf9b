//! Comparison helpers for integration tests.

use serde_json::Value;

/// Structural equality with the differ's number semantics: numbers compare
/// as double-precision values, so `1` and `1.0` are equal even though
/// `serde_json` keeps them in different internal representations.
pub fn json_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(xv, yv)| json_eq(xv, yv))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter().all(|(k, xv)| y.get(k).map(|yv| json_eq(xv, yv)).unwrap_or(false))
        }
        _ => a == b,
    }
}
