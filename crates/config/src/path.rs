//! Dot-notation traversal over nested values.
//!
//! A key such as `database.replicas.0.host` is split on `.` and each segment
//! selects an object field or, for arrays, a decimal index. Traversal never
//! fails: a missing segment resolves to `None`.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::constants::PATH_SEPARATOR;

/// Resolve `key` against a map of top-level values.
///
/// An exact top-level match wins over path traversal, so a key stored
/// literally as `"a.b"` is returned as-is.
pub fn lookup<'a>(root: &'a BTreeMap<String, Value>, key: &str) -> Option<&'a Value> {
    root.get(key).or_else(|| walk(root, key))
}

/// Resolve `key` segment by segment, ignoring exact top-level matches.
pub fn walk<'a>(root: &'a BTreeMap<String, Value>, key: &str) -> Option<&'a Value> {
    let mut segments = key.split(PATH_SEPARATOR);
    let first = segments.next()?;
    segments.try_fold(root.get(first)?, descend)
}

/// Step one segment into `value`.
pub fn descend<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(fields) => fields.get(segment),
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get(index)),
        _ => None,
    }
}
