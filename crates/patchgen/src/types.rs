//! Core types for patch generation.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The input bytes were not a well-formed JSON document.
    #[error("INVALID_DOCUMENT")]
    InvalidDocument,
    /// A value could not be canonically serialized. The value union is
    /// closed, so this indicates a programming error in whatever built the
    /// tree, not a data error.
    #[error("UNSUPPORTED_VALUE_SHAPE")]
    UnsupportedValueShape,
}

// ── Patch operations ──────────────────────────────────────────────────────

/// A single JSON Patch operation targeting one path in a document.
///
/// Paths are JSON-Pointer strings; the empty string addresses the document
/// root. `Remove` may carry the removed value internally (the array differ
/// needs it to coalesce remove+add pairs into recursive diffs), but the
/// value is always cleared before an operation reaches the final result.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOp {
    Add { path: String, value: Value },
    Remove { path: String, old_value: Option<Value> },
    Replace { path: String, value: Value },
}

impl PatchOp {
    pub fn add(path: impl Into<String>, value: Value) -> Self {
        PatchOp::Add { path: path.into(), value }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        PatchOp::Remove { path: path.into(), old_value: None }
    }

    /// A removal that still carries the removed value, for the array
    /// differ's coalescing pass.
    pub(crate) fn remove_carrying(path: impl Into<String>, old_value: Value) -> Self {
        PatchOp::Remove { path: path.into(), old_value: Some(old_value) }
    }

    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        PatchOp::Replace { path: path.into(), value }
    }

    pub fn op_name(&self) -> &'static str {
        match self {
            PatchOp::Add { .. } => "add",
            PatchOp::Remove { .. } => "remove",
            PatchOp::Replace { .. } => "replace",
        }
    }

    pub fn path(&self) -> &str {
        match self {
            PatchOp::Add { path, .. }
            | PatchOp::Remove { path, .. }
            | PatchOp::Replace { path, .. } => path,
        }
    }

    /// The operation's value: present for add/replace, `None` for remove
    /// once the carried value has been cleared.
    pub fn value(&self) -> Option<&Value> {
        match self {
            PatchOp::Add { value, .. } | PatchOp::Replace { value, .. } => Some(value),
            PatchOp::Remove { old_value, .. } => old_value.as_ref(),
        }
    }
}

/// Canonical wire form: `{"op": ..., "path": ..., "value"?: ...}`.
///
/// `value` is always present for `add` and `replace` (even when null, since
/// null is a legitimate document value there), and for `remove` only while a
/// non-null value is still attached pre-coalescing. This keeps encoded-size
/// comparisons between candidate patches meaningful.
impl Serialize for PatchOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PatchOp::Add { path, value } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("op", "add")?;
                map.serialize_entry("path", path)?;
                map.serialize_entry("value", value)?;
                map.end()
            }
            PatchOp::Replace { path, value } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("op", "replace")?;
                map.serialize_entry("path", path)?;
                map.serialize_entry("value", value)?;
                map.end()
            }
            PatchOp::Remove { path, old_value } => {
                let carried = old_value.as_ref().filter(|v| !v.is_null());
                let mut map = serializer.serialize_map(Some(if carried.is_some() { 3 } else { 2 }))?;
                map.serialize_entry("op", "remove")?;
                map.serialize_entry("path", path)?;
                if let Some(v) = carried {
                    map.serialize_entry("value", v)?;
                }
                map.end()
            }
        }
    }
}

/// Sort operations by path, lexicographically.
///
/// Patch application order is already valid as generated; this exists for
/// callers and tests that want a stable presentation order.
pub fn sort_by_path(ops: &mut [PatchOp]) {
    ops.sort_by(|a, b| a.path().cmp(b.path()));
}
