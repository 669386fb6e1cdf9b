//! Array reconciliation.
//!
//! A greedy, single-pass heuristic rather than an optimal sequence
//! alignment: elements of the original that reappear verbatim later in the
//! target are treated as anchors ("fixed") and kept in place; everything
//! else is resolved by inserting before an anchor or dropping an unanchored
//! element. A final pass coalesces adjacent remove+add pairs at the same
//! index into a recursive diff, so an element modified in place is not
//! expressed as a full swap.

use serde_json::Value;

use patchgen_pointer::extend_pointer_index;

use crate::types::{DiffError, PatchOp};

use super::{deep_equal, diff_at};

pub(crate) fn diff_arrays(
    a: &[Value],
    b: &[Value],
    path: &str,
) -> Result<Vec<PatchOp>, DiffError> {
    // An element of `a` is fixed when it has an exact match in `b` at or
    // after its own index. Fixed elements should remain in place.
    let fixed: Vec<bool> = a
        .iter()
        .enumerate()
        .map(|(i, ae)| b.iter().skip(i).any(|be| deep_equal(ae, be)))
        .collect();

    // Walk both arrays with independent cursors. `added_delta` tracks how
    // far the output written so far has drifted from the consumed prefix
    // of `a`, so `a_index + added_delta` is the index in the array as it
    // stands mid-application.
    let mut patch = Vec::new();
    let mut a_index = 0usize;
    let mut b_index = 0usize;
    let mut added_delta = 0isize;
    while a_index < a.len() || b_index < b.len() {
        // Never negative: each decrement of added_delta is paired with an
        // increment of a_index.
        let tmp_index = (a_index as isize + added_delta) as usize;
        let new_path = extend_pointer_index(path, tmp_index);
        if a_index >= a.len() {
            // a is exhausted, all remaining items in b must be adds
            patch.push(PatchOp::add(new_path, b[b_index].clone()));
            added_delta += 1;
            b_index += 1;
            continue;
        }
        if b_index >= b.len() {
            // b is exhausted, all remaining items in a must be removed
            patch.push(PatchOp::remove_carrying(new_path, a[a_index].clone()));
            added_delta -= 1;
            a_index += 1;
            continue;
        }
        if deep_equal(&a[a_index], &b[b_index]) {
            // element is already in b, move on
            a_index += 1;
            b_index += 1;
        } else if fixed[a_index] {
            // the anchored element must stay, insert before it
            patch.push(PatchOp::add(new_path, b[b_index].clone()));
            added_delta += 1;
            b_index += 1;
        } else {
            // keep the value so the coalescing pass can diff against it
            patch.push(PatchOp::remove_carrying(new_path, a[a_index].clone()));
            added_delta -= 1;
            a_index += 1;
        }
    }

    // Coalesce remove+add pairs at the same index into a recursive diff
    // (which may itself collapse to a replace).
    let mut coalesced = Vec::with_capacity(patch.len());
    let mut i = 0;
    while i < patch.len() {
        if let (
            PatchOp::Remove { path: removed_path, old_value },
            Some(PatchOp::Add { path: added_path, value: added }),
        ) = (&patch[i], patch.get(i + 1))
        {
            if removed_path == added_path {
                let removed = old_value.clone().unwrap_or(Value::Null);
                coalesced.extend(diff_at(&removed, added, removed_path)?);
                i += 2;
                continue;
            }
        }
        // Removals never carry a value in the final output
        let mut op = patch[i].clone();
        if let PatchOp::Remove { old_value, .. } = &mut op {
            *old_value = None;
        }
        coalesced.push(op);
        i += 1;
    }

    Ok(coalesced)
}
