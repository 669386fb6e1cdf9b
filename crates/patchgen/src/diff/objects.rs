//! Object (key-to-value mapping) diffing.

use serde_json::{Map, Value};

use patchgen_pointer::extend_pointer;

use crate::types::{DiffError, PatchOp};

use super::{diff_at, same_shape};

/// Diff two objects key by key: additions and changed keys in `b`'s
/// iteration order first, then removals for keys only present in `a`.
pub(crate) fn diff_objects(
    a: &Map<String, Value>,
    b: &Map<String, Value>,
    path: &str,
) -> Result<Vec<PatchOp>, DiffError> {
    let mut patch = Vec::new();
    for (key, bv) in b {
        let p = extend_pointer(path, key);
        match a.get(key) {
            // Key doesn't exist in the original document, value was added
            None => patch.push(PatchOp::add(p, bv.clone())),
            // Shape changed: replace outright, recursion cannot do better
            Some(av) if !same_shape(av, bv) => patch.push(PatchOp::replace(p, bv.clone())),
            Some(av) => patch.extend(diff_at(av, bv, &p)?),
        }
    }
    for key in a.keys() {
        if !b.contains_key(key) {
            patch.push(PatchOp::remove(extend_pointer(path, key)));
        }
    }
    Ok(patch)
}
