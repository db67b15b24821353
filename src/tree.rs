//! Indented textual tree view of a JSON value.
//!
//! Container nodes show a size badge (`{n}` for objects, `[n]` for arrays)
//! and their children indented one level deeper; leaves show their value
//! with strings quoted. A root object or array renders its children at depth
//! zero.

use crate::value::Value;

/// Renders a value as an indented tree.
///
/// # Examples
///
/// ```
/// use jsonkit::{parse_json, render_tree};
///
/// let value = parse_json(r#"{"user": {"name": "Ada"}}"#).unwrap();
/// let tree = render_tree(&value);
/// assert!(tree.contains("user: {1}"));
/// assert!(tree.contains("  name: \"Ada\""));
/// ```
pub fn render_tree(value: &Value) -> String {
    let mut out = String::new();
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                write_node(&mut out, key, child, 0);
            }
        }
        Value::Array(arr) => {
            for (i, child) in arr.iter().enumerate() {
                write_node(&mut out, &format!("[{}]", i), child, 0);
            }
        }
        leaf => {
            out.push_str(&leaf.preview(usize::MAX));
            out.push('\n');
        }
    }
    out
}

fn write_node(out: &mut String, key: &str, value: &Value, level: usize) {
    let indent = "  ".repeat(level);
    match value {
        Value::Object(map) => {
            out.push_str(&format!("{}{}: {{{}}}\n", indent, key, map.len()));
            for (child_key, child) in map {
                write_node(out, child_key, child, level + 1);
            }
        }
        Value::Array(arr) => {
            out.push_str(&format!("{}{}: [{}]\n", indent, key, arr.len()));
            for (i, child) in arr.iter().enumerate() {
                write_node(out, &format!("[{}]", i), child, level + 1);
            }
        }
        leaf => {
            out.push_str(&format!("{}{}: {}\n", indent, key, leaf.preview(usize::MAX)));
        }
    }
}
