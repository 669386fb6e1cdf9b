//! patchgen — generate JSON Patch operations by structural diff.
//!
//! Given two JSON documents, [`diff`] produces the sequence of RFC 6902
//! `add` / `remove` / `replace` operations that transforms the first into
//! the second. The differ is a practical heuristic, not an optimal
//! tree-edit-distance solver: objects are compared key by key, arrays are
//! reconciled with a greedy anchor-based walk, and at every level of the
//! tree the fine-grained edits compete against a single wholesale
//! `replace` — whichever encodes smaller wins.
//!
//! Inputs are already-parsed [`serde_json::Value`] trees; parsing raw
//! bytes and applying patches are the caller's concern ([`diff_bytes`] is
//! a thin convenience wrapper over the former).
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let src = json!({"persons": [{"name": "Ed"}, {}]});
//! let dst = json!({"persons": [{"name": "Ed"}, {}, {}]});
//! let ops = patchgen::diff(&src, &dst).unwrap();
//!
//! assert_eq!(
//!     serde_json::to_string(&ops).unwrap(),
//!     r#"[{"op":"add","path":"/persons/2","value":{}}]"#
//! );
//! ```

pub mod diff;
pub mod types;

pub use diff::{diff, diff_bytes, smallest};
pub use types::{sort_by_path, DiffError, PatchOp};
