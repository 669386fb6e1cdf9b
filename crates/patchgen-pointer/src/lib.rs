//! JSON Pointer (RFC 6901) utilities.
//!
//! This crate implements the helper functions for
//! [JSON Pointer (RFC 6901)](https://tools.ietf.org/html/rfc6901) that patch
//! generation needs: component escaping, incremental pointer extension, and
//! (for replaying patches) pointer parsing and document navigation.
//!
//! # Example
//!
//! ```
//! use patchgen_pointer::{extend_pointer, parse_json_pointer, get};
//!
//! // Build a pointer one token at a time
//! let p = extend_pointer("", "foo");
//! let p = extend_pointer(&p, "a/b");
//! assert_eq!(p, "/foo/a~1b");
//!
//! // Parse it back into path components
//! assert_eq!(parse_json_pointer(&p), vec!["foo".to_string(), "a/b".to_string()]);
//!
//! // Navigate a document
//! let doc = serde_json::json!({"foo": {"bar": 42}});
//! let val = get(&doc, &["foo".to_string(), "bar".to_string()]);
//! assert_eq!(val, Some(&serde_json::json!(42)));
//! ```

use serde_json::Value;
use thiserror::Error;

/// Escapes a JSON Pointer path component.
///
/// Per RFC 6901, `~` is replaced with `~0` and `/` is replaced with `~1`.
///
/// # Example
///
/// ```
/// use patchgen_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// assert_eq!(escape_component("no-escapes"), "no-escapes");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~ must be escaped before /
    component.replace('~', "~0").replace('/', "~1")
}

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// # Example
///
/// ```
/// use patchgen_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~1 must be replaced before ~0
    component.replace("~1", "/").replace("~0", "~")
}

/// Extend a JSON Pointer string with one more (escaped) object key.
///
/// The empty string is the root pointer, so `extend_pointer("", "k")` yields
/// `"/k"`.
///
/// # Example
///
/// ```
/// use patchgen_pointer::extend_pointer;
///
/// assert_eq!(extend_pointer("", "foo"), "/foo");
/// assert_eq!(extend_pointer("/foo", "bar"), "/foo/bar");
/// assert_eq!(extend_pointer("/foo", "a~b"), "/foo/a~0b");
/// ```
pub fn extend_pointer(path: &str, token: &str) -> String {
    let key = escape_component(token);
    let mut out = String::with_capacity(path.len() + key.len() + 1);
    out.push_str(path);
    out.push('/');
    out.push_str(&key);
    out
}

/// Extend a JSON Pointer string with an array index.
///
/// Decimal digits never need escaping, so this skips the escape pass.
///
/// # Example
///
/// ```
/// use patchgen_pointer::extend_pointer_index;
///
/// assert_eq!(extend_pointer_index("", 0), "/0");
/// assert_eq!(extend_pointer_index("/a", 12), "/a/12");
/// ```
pub fn extend_pointer_index(path: &str, index: usize) -> String {
    let mut out = String::with_capacity(path.len() + 4);
    out.push_str(path);
    out.push('/');
    out.push_str(&index.to_string());
    out
}

/// Parse a JSON Pointer string into path components.
///
/// - Empty string returns an empty vec (the root)
/// - The leading `/` is stripped
/// - Each component is unescaped
///
/// # Example
///
/// ```
/// use patchgen_pointer::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer(""), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/foo/bar"), vec!["foo", "bar"]);
/// assert_eq!(parse_json_pointer("/a~0b/c~1d"), vec!["a~b", "c/d"]);
/// ```
pub fn parse_json_pointer(pointer: &str) -> Vec<String> {
    if pointer.is_empty() {
        return Vec::new();
    }
    pointer[1..].split('/').map(unescape_component).collect()
}

/// Get the parent path of a given path.
///
/// # Errors
///
/// Returns [`PointerError::NoParent`] if the path is the root.
pub fn parent(path: &[String]) -> Result<Vec<String>, PointerError> {
    if path.is_empty() {
        return Err(PointerError::NoParent);
    }
    Ok(path[..path.len() - 1].to_vec())
}

/// Check if a string represents a valid non-negative integer array index.
///
/// # Example
///
/// ```
/// use patchgen_pointer::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("abc"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    // No leading zero unless the index is exactly "0"
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Get a value from a JSON document by path.
///
/// Returns `None` if the path doesn't exist or is invalid.
///
/// # Example
///
/// ```
/// use patchgen_pointer::get;
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": 42}});
/// let val = get(&doc, &["foo".to_string(), "bar".to_string()]);
/// assert_eq!(val, Some(&json!(42)));
/// ```
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = val;
    for path_step in path {
        match current {
            Value::Array(arr) => {
                let idx: usize = path_step.parse().ok()?;
                current = arr.get(idx)?;
            }
            Value::Object(map) => {
                current = map.get(path_step)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Get a mutable reference to a value in a JSON document by path.
///
/// Returns `None` if the path doesn't exist or is invalid.
pub fn get_mut<'a>(val: &'a mut Value, path: &[String]) -> Option<&'a mut Value> {
    let mut current = val;
    for path_step in path {
        match current {
            Value::Array(arr) => {
                let idx: usize = path_step.parse().ok()?;
                current = arr.get_mut(idx)?;
            }
            Value::Object(map) => {
                current = map.get_mut(path_step)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("NO_PARENT")]
    NoParent,
    #[error("INVALID_INDEX")]
    InvalidIndex,
}
