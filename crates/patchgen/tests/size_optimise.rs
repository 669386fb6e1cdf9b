//! Replace-vs-incremental size optimization scenarios.

mod common;

use common::apply::apply;
use patchgen::{diff, PatchOp};
use serde_json::json;

const LOREM: &str = "Lorem Ipsum is simply dummy text of the printing and typesetting \
industry. Lorem Ipsum has been the industry's standard dummy text ever since the 1500s, \
when an unknown printer took a galley of type and scrambled it to make a type specimen \
book. It has survived not only five centuries, but also the leap into electronic \
typesetting, remaining essentially unchanged. It was popularised in the 1960s with the \
release of Letraset sheets containing Lorem Ipsum passages, and more recently with \
desktop publishing software like Aldus PageMaker including versions of Lorem Ipsum.";

// The array changed almost entirely, so one replace of the whole array
// encodes smaller than the per-element operations.
#[test]
fn replace_instead_of_array_ops() {
    let a = json!({"a": [1, 2, 3]});
    let b = json!({"a": [1, 0, 0]});

    let ops = diff(&a, &b).unwrap();
    assert_eq!(ops, vec![PatchOp::replace("/a", json!([1, 0, 0]))]);
    assert_eq!(apply(a, &ops), b);
}

// One element carries a large unchanged payload, so fine-grained edits
// inside it stay cheaper than replacing the element or the array.
#[test]
fn keep_array_ops_when_element_is_large() {
    let a = json!([1, 2, {"a": LOREM, "b": "2"}]);
    let b = json!([1, 2, {"a": LOREM, "b": "1", "c": "3"}]);

    let ops = diff(&a, &b).unwrap();
    assert_eq!(
        ops,
        vec![
            PatchOp::replace("/2/b", json!("1")),
            PatchOp::add("/2/c", json!("3")),
        ]
    );
    assert_eq!(apply(a, &ops), b);
}

#[test]
fn inner_object_addition() {
    let a = json!([1, 2, ["a", {"k1": "v1"}]]);
    let b = json!([1, 2, ["a", {"k2": "v2", "k1": "v1"}]]);

    let ops = diff(&a, &b).unwrap();
    assert_eq!(ops, vec![PatchOp::add("/2/1/k2", json!("v2"))]);
    assert_eq!(apply(a, &ops), b);
}

#[test]
fn inner_array_addition() {
    let a = json!([1, ["a", ["x", true], "b"], 2]);
    let b = json!([1, ["a", ["x", false, true], "b"], 2]);

    let ops = diff(&a, &b).unwrap();
    assert_eq!(ops, vec![PatchOp::add("/1/1/1", json!(false))]);
    assert_eq!(apply(a, &ops), b);
}

// The choice is made at every recursion depth, not only at the root: a
// deeply nested subtree that changed entirely collapses to one replace at
// its own path while its untouched siblings stay out of the patch.
#[test]
fn nested_subtree_collapses_locally() {
    let a = json!({
        "keep": LOREM,
        "nested": {"inner": [1, 2, 3]}
    });
    let b = json!({
        "keep": LOREM,
        "nested": {"inner": [7, 8, 9]}
    });

    let ops = diff(&a, &b).unwrap();
    assert_eq!(
        ops,
        vec![PatchOp::replace("/nested/inner", json!([7, 8, 9]))]
    );
    assert_eq!(apply(a, &ops), b);
}
