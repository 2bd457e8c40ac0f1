//! Dot-path operations over a JSON object tree.
//!
//! Shared by the file-backed and in-memory backends. All functions take
//! pre-split path segments; path validation happens once at the backend
//! boundary.

use rolecall_error::{RolecallResult, StoreError, StoreErrorKind};
use serde_json::{Map, Value};

/// Split and validate a dot path. The empty path is rejected; callers that
/// accept it (only `keys`) special-case it before calling.
pub(crate) fn split(path: &str) -> RolecallResult<Vec<&str>> {
    if path.is_empty() || path.split('.').any(str::is_empty) {
        return Err(StoreError::new(StoreErrorKind::InvalidPath(path.to_string())).into());
    }
    Ok(path.split('.').collect())
}

/// The node at a path, if present.
pub(crate) fn lookup<'a>(root: &'a Value, segments: &[&str]) -> Option<&'a Value> {
    let mut node = root;
    for segment in segments {
        node = node.as_object()?.get(*segment)?;
    }
    Some(node)
}

/// Set a string leaf, creating intermediate branches. Fails when a leaf
/// already occupies an interior segment.
pub(crate) fn insert(root: &mut Value, segments: &[&str], value: &str) -> RolecallResult<()> {
    let mut node = root;
    let Some((last, interior)) = segments.split_last() else {
        return Err(StoreError::new(StoreErrorKind::InvalidPath(String::new())).into());
    };
    for segment in interior {
        let map = node.as_object_mut().ok_or_else(|| {
            StoreError::new(StoreErrorKind::InvalidPath(segments.join(".")))
        })?;
        node = map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    let map = node
        .as_object_mut()
        .ok_or_else(|| StoreError::new(StoreErrorKind::InvalidPath(segments.join("."))))?;
    map.insert(last.to_string(), Value::String(value.to_string()));
    Ok(())
}

/// Remove the entry at a path, pruning branches left empty. Returns whether
/// anything was removed.
pub(crate) fn remove(root: &mut Value, segments: &[&str]) -> bool {
    let Some(map) = root.as_object_mut() else {
        return false;
    };
    match segments {
        [] => false,
        [leaf] => map.remove(*leaf).is_some(),
        [head, rest @ ..] => {
            let Some(child) = map.get_mut(*head) else {
                return false;
            };
            let removed = remove(child, rest);
            if removed && child.as_object().is_some_and(Map::is_empty) {
                map.remove(*head);
            }
            removed
        }
    }
}

/// Child segment names of the branch at a path; empty for leaves and absent
/// paths.
pub(crate) fn children(root: &Value, segments: &[&str]) -> Vec<String> {
    lookup(root, segments)
        .and_then(Value::as_object)
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}

/// The string leaf at a path, if the node exists and is a string.
pub(crate) fn leaf(root: &Value, segments: &[&str]) -> Option<String> {
    lookup(root, segments)
        .and_then(Value::as_str)
        .map(str::to_string)
}
