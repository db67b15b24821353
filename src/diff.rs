//! Structural diff between two JSON values.
//!
//! The algorithm walks both trees depth-first and records one entry per
//! structural difference, keyed by a dotted/bracketed path. Object keys are
//! visited in the union of both objects' key sets; arrays are compared
//! element-by-index (an array reorder shows up as per-index modifications,
//! not as a move).
//!
//! # Examples
//!
//! ```
//! use jsonkit::{compute_diff, parse_json, DiffKind};
//!
//! let old = parse_json(r#"{"a": 1}"#).unwrap();
//! let new = parse_json(r#"{"a": 1, "b": 2}"#).unwrap();
//!
//! let entries = compute_diff(&old, &new);
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].kind, DiffKind::Added);
//! assert_eq!(entries[0].path, "b");
//! ```

use crate::value::Value;
use indexmap::IndexMap;
use std::mem::discriminant;

/// The kind of structural difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffKind {
    /// Present in new but not old
    Added,
    /// Present in old but not new
    Removed,
    /// Present in both with different values of the same type
    Modified,
    /// Present in both with different types; no descent below this path
    TypeChanged,
}

impl DiffKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffKind::Added => "added",
            DiffKind::Removed => "removed",
            DiffKind::Modified => "modified",
            DiffKind::TypeChanged => "type_changed",
        }
    }
}

/// One structural difference at a specific path.
///
/// The path is a dotted/bracketed string: object traversal appends `.key`,
/// array traversal appends `[index]`, and the root path is empty. For
/// `TypeChanged` both values are carried so a renderer can show the old and
/// new type names.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffEntry {
    pub kind: DiffKind,
    pub path: String,
    /// Old value (None for Added)
    pub old: Option<Value>,
    /// New value (None for Removed)
    pub new: Option<Value>,
}

/// Summary counts over a list of diff entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub type_changed: usize,
}

impl DiffStats {
    pub fn from_entries(entries: &[DiffEntry]) -> Self {
        let mut stats = Self::default();
        for entry in entries {
            match entry.kind {
                DiffKind::Added => stats.added += 1,
                DiffKind::Removed => stats.removed += 1,
                DiffKind::Modified => stats.modified += 1,
                DiffKind::TypeChanged => stats.type_changed += 1,
            }
        }
        stats
    }

    pub fn total(&self) -> usize {
        self.added + self.removed + self.modified + self.type_changed
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Computes the structural diff between two values.
///
/// Pure function: entries come back in traversal order, and an empty vec
/// means the two values are structurally identical. Parse failures are the
/// caller's concern; this function only ever sees valid values.
pub fn compute_diff(old: &Value, new: &Value) -> Vec<DiffEntry> {
    let mut entries = Vec::new();
    diff_values(old, new, "", &mut entries);
    entries
}

fn diff_values(old: &Value, new: &Value, path: &str, entries: &mut Vec<DiffEntry>) {
    // Object, array, and each primitive type are mutually distinct; a type
    // change is reported as-is without descending further.
    if discriminant(old) != discriminant(new) {
        entries.push(DiffEntry {
            kind: DiffKind::TypeChanged,
            path: path.to_string(),
            old: Some(old.clone()),
            new: Some(new.clone()),
        });
        return;
    }

    match (old, new) {
        (Value::Object(old_map), Value::Object(new_map)) => {
            diff_objects(old_map, new_map, path, entries);
        }
        (Value::Array(old_arr), Value::Array(new_arr)) => {
            diff_arrays(old_arr, new_arr, path, entries);
        }
        _ => {
            if old != new {
                entries.push(DiffEntry {
                    kind: DiffKind::Modified,
                    path: path.to_string(),
                    old: Some(old.clone()),
                    new: Some(new.clone()),
                });
            }
        }
    }
}

/// Visits the union of both key sets exactly once: keys of the old object in
/// stored order first (removed or recursed), then keys only the new object
/// has, in its stored order (added).
fn diff_objects(
    old_map: &IndexMap<String, Value>,
    new_map: &IndexMap<String, Value>,
    path: &str,
    entries: &mut Vec<DiffEntry>,
) {
    for (key, old_value) in old_map {
        let child = object_path(path, key);
        match new_map.get(key) {
            Some(new_value) => diff_values(old_value, new_value, &child, entries),
            None => entries.push(DiffEntry {
                kind: DiffKind::Removed,
                path: child,
                old: Some(old_value.clone()),
                new: None,
            }),
        }
    }

    for (key, new_value) in new_map {
        if !old_map.contains_key(key) {
            entries.push(DiffEntry {
                kind: DiffKind::Added,
                path: object_path(path, key),
                old: None,
                new: Some(new_value.clone()),
            });
        }
    }
}

/// Positional comparison: the index acts as the key. Extra trailing elements
/// are reported as added or removed.
fn diff_arrays(old_arr: &[Value], new_arr: &[Value], path: &str, entries: &mut Vec<DiffEntry>) {
    let min_len = old_arr.len().min(new_arr.len());

    for i in 0..min_len {
        diff_values(&old_arr[i], &new_arr[i], &index_path(path, i), entries);
    }

    for (i, item) in old_arr.iter().enumerate().skip(min_len) {
        entries.push(DiffEntry {
            kind: DiffKind::Removed,
            path: index_path(path, i),
            old: Some(item.clone()),
            new: None,
        });
    }

    for (i, item) in new_arr.iter().enumerate().skip(min_len) {
        entries.push(DiffEntry {
            kind: DiffKind::Added,
            path: index_path(path, i),
            old: None,
            new: Some(item.clone()),
        });
    }
}

fn object_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn index_path(path: &str, index: usize) -> String {
    format!("{}[{}]", path, index)
}
