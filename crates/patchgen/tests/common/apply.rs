//! Test-side JSON Patch applier.
//!
//! Replays generated patches so round-trip tests can verify the diff
//! output against the target document. Only the three operations the
//! differ emits are supported; anything unexpected panics, which is the
//! right behavior for harness code.

use patchgen::PatchOp;
use patchgen_pointer::{get_mut, is_valid_index, parse_json_pointer};
use serde_json::Value;

/// Apply `ops` to `doc` in order, returning the patched document.
pub fn apply(mut doc: Value, ops: &[PatchOp]) -> Value {
    for op in ops {
        apply_op(&mut doc, op);
    }
    doc
}

fn apply_op(doc: &mut Value, op: &PatchOp) {
    let steps = parse_json_pointer(op.path());
    let Some((last, parent_steps)) = steps.split_last() else {
        // Root operations swap out the whole document.
        match op {
            PatchOp::Add { value, .. } | PatchOp::Replace { value, .. } => *doc = value.clone(),
            PatchOp::Remove { .. } => panic!("remove at document root"),
        }
        return;
    };

    let parent = get_mut(doc, parent_steps)
        .unwrap_or_else(|| panic!("parent of {} does not exist", op.path()));

    match parent {
        Value::Array(arr) => {
            assert!(is_valid_index(last), "bad array index in {}", op.path());
            let idx: usize = last.parse().unwrap();
            match op {
                PatchOp::Add { value, .. } => arr.insert(idx, value.clone()),
                PatchOp::Replace { value, .. } => arr[idx] = value.clone(),
                PatchOp::Remove { .. } => {
                    arr.remove(idx);
                }
            }
        }
        Value::Object(map) => match op {
            PatchOp::Add { value, .. } | PatchOp::Replace { value, .. } => {
                map.insert(last.clone(), value.clone());
            }
            PatchOp::Remove { .. } => {
                map.remove(last);
            }
        },
        other => panic!("cannot apply {} to {other:?}", op.op_name()),
    }
}
