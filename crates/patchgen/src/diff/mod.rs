//! Structural diff between two JSON values.
//!
//! [`diff`] walks both documents in lockstep and produces the `add` /
//! `remove` / `replace` operations that transform the first into the
//! second. At every level of recursion the fine-grained candidate is
//! weighed against a single wholesale `replace` of the subtree, and the
//! one with the smaller canonical encoding wins, so a subtree that changed
//! almost entirely collapses to one operation instead of many.

mod arrays;
mod objects;

use std::mem::discriminant;

use serde_json::Value;

use crate::types::{DiffError, PatchOp};

// ── Public API ────────────────────────────────────────────────────────────

/// Generate a JSON Patch (list of operations) that transforms `a` into `b`.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let ops = patchgen::diff(&json!({"a": [1, 2, 3]}), &json!({"a": [1, 2, 3, 4]})).unwrap();
/// assert_eq!(serde_json::to_string(&ops).unwrap(), r#"[{"op":"add","path":"/a/3","value":4}]"#);
/// ```
pub fn diff(a: &Value, b: &Value) -> Result<Vec<PatchOp>, DiffError> {
    diff_at(a, b, "")
}

/// Diff two raw JSON documents, returning the patch in its canonical JSON
/// array encoding.
///
/// # Errors
///
/// [`DiffError::InvalidDocument`] if either input is not well-formed JSON.
pub fn diff_bytes(a: &[u8], b: &[u8]) -> Result<Vec<u8>, DiffError> {
    let av: Value = serde_json::from_slice(a).map_err(|_| DiffError::InvalidDocument)?;
    let bv: Value = serde_json::from_slice(b).map_err(|_| DiffError::InvalidDocument)?;
    let ops = diff_at(&av, &bv, "")?;
    encode(&ops)
}

// ── Core recursive differ ─────────────────────────────────────────────────

pub(crate) fn diff_at(a: &Value, b: &Value, path: &str) -> Result<Vec<PatchOp>, DiffError> {
    let full_replace = vec![PatchOp::replace(path, b.clone())];

    // Different shapes: the only sensible edit is a wholesale replacement.
    if !same_shape(a, b) {
        return Ok(full_replace);
    }

    let patch = match (a, b) {
        (Value::Object(ao), Value::Object(bo)) => objects::diff_objects(ao, bo, path)?,
        (Value::Array(aa), Value::Array(ba)) => arrays::diff_arrays(aa, ba, path)?,
        (Value::Null, Value::Null) => Vec::new(),
        _ => {
            if deep_equal(a, b) {
                Vec::new()
            } else {
                vec![PatchOp::replace(path, b.clone())]
            }
        }
    };

    // The recursive candidate must beat the single replace outright;
    // on a tie the replace wins.
    smallest(vec![full_replace, patch])
}

/// Whether two values belong to the same variant of the value union.
pub(crate) fn same_shape(a: &Value, b: &Value) -> bool {
    discriminant(a) == discriminant(b)
}

/// Structural equality with double-precision number semantics: `1` and
/// `1.0` are the same number. Everything else compares exactly.
pub(crate) fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(xv, yv)| deep_equal(xv, yv))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter().all(|(k, xv)| y.get(k).is_some_and(|yv| deep_equal(xv, yv)))
        }
        _ => false,
    }
}

// ── Patch optimizer ───────────────────────────────────────────────────────

/// Of several candidate patches describing the same transformation, keep
/// the one with the smallest canonical encoding. The first candidate wins
/// ties.
pub fn smallest(candidates: Vec<Vec<PatchOp>>) -> Result<Vec<PatchOp>, DiffError> {
    let mut it = candidates.into_iter();
    let Some(first) = it.next() else {
        return Ok(Vec::new());
    };
    let mut best_size = encode(&first)?.len();
    let mut best = first;
    for candidate in it {
        let size = encode(&candidate)?.len();
        if size < best_size {
            best = candidate;
            best_size = size;
        }
    }
    Ok(best)
}

fn encode(ops: &[PatchOp]) -> Result<Vec<u8>, DiffError> {
    serde_json::to_vec(ops).map_err(|_| DiffError::UnsupportedValueShape)
}
