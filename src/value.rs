//! In-memory representation of a parsed JSON document.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A parsed JSON value.
///
/// Object keys are unique and keep their insertion order. Order matters for
/// display and for CSV header derivation, but not for equality: two objects
/// with the same entries in a different order compare equal.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// True for objects whose values are all scalars (no nested containers).
    /// Such objects are eligible for CSV conversion as a single row.
    pub fn is_flat_object(&self) -> bool {
        match self {
            Value::Object(map) => map
                .values()
                .all(|v| !matches!(v, Value::Array(_) | Value::Object(_))),
            _ => false,
        }
    }

    /// Returns a short preview of the value, truncated to max_len.
    pub fn preview(&self, max_len: usize) -> String {
        let preview = match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => number_text(*n),
            Value::String(s) => format!("\"{}\"", s),
            Value::Object(map) => {
                let count = map.len();
                if count == 0 {
                    "{}".to_string()
                } else if count == 1 {
                    format!("{{ {} key }}", count)
                } else {
                    format!("{{ {} keys }}", count)
                }
            }
            Value::Array(arr) => {
                let count = arr.len();
                if count == 0 {
                    "[]".to_string()
                } else if count == 1 {
                    format!("[ {} item ]", count)
                } else {
                    format!("[ {} items ]", count)
                }
            }
        };

        if preview.len() > max_len {
            // Truncate on a char boundary; a byte slice would panic on
            // multibyte content.
            let mut cut = max_len.saturating_sub(3);
            while !preview.is_char_boundary(cut) {
                cut -= 1;
            }
            format!("{}...", &preview[..cut])
        } else {
            preview
        }
    }
}

/// Renders a number the way JSON.stringify would: integral values without a
/// trailing ".0".
pub(crate) fn number_text(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 9.0e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => {
                // Integral numbers serialize as integers so round-trips
                // through JSON and YAML keep their textual form.
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 9.0e15 {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => serializer.collect_seq(arr),
            Value::Object(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    state.serialize_entry(key, value)?;
                }
                state.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Bool(true).type_name(), "boolean");
        assert_eq!(Value::Number(1.0).type_name(), "number");
        assert_eq!(Value::String("x".to_string()).type_name(), "string");
        assert_eq!(Value::Array(vec![]).type_name(), "array");
        assert_eq!(Value::Object(IndexMap::new()).type_name(), "object");
    }

    #[test]
    fn test_object_equality_ignores_key_order() {
        let mut a = IndexMap::new();
        a.insert("x".to_string(), Value::Number(1.0));
        a.insert("y".to_string(), Value::Number(2.0));

        let mut b = IndexMap::new();
        b.insert("y".to_string(), Value::Number(2.0));
        b.insert("x".to_string(), Value::Number(1.0));

        assert_eq!(Value::Object(a), Value::Object(b));
    }

    #[test]
    fn test_number_text() {
        assert_eq!(number_text(42.0), "42");
        assert_eq!(number_text(-7.0), "-7");
        assert_eq!(number_text(3.25), "3.25");
    }

    #[test]
    fn test_preview_scalars() {
        assert_eq!(Value::Null.preview(80), "null");
        assert_eq!(Value::Bool(false).preview(80), "false");
        assert_eq!(Value::Number(1.5).preview(80), "1.5");
        assert_eq!(Value::String("hi".to_string()).preview(80), "\"hi\"");
    }

    #[test]
    fn test_preview_containers() {
        assert_eq!(Value::Array(vec![]).preview(80), "[]");
        assert_eq!(
            Value::Array(vec![Value::Null, Value::Null]).preview(80),
            "[ 2 items ]"
        );

        let mut map = IndexMap::new();
        map.insert("a".to_string(), Value::Null);
        assert_eq!(Value::Object(map).preview(80), "{ 1 key }");
    }

    #[test]
    fn test_preview_truncation() {
        let long = Value::String("a".repeat(100));
        let preview = long.preview(20);
        assert!(preview.ends_with("..."));
        assert!(preview.len() <= 20);
    }

    #[test]
    fn test_preview_truncation_multibyte() {
        // The cut must land on a char boundary, not a raw byte offset.
        for max_len in [10, 20, 80] {
            let long = Value::String("€".repeat(40));
            let preview = long.preview(max_len);
            assert!(preview.ends_with("..."));
            assert!(preview.len() <= max_len);
        }

        let mixed = Value::String("añé🎉".repeat(25));
        let preview = mixed.preview(16);
        assert!(preview.ends_with("..."));
        assert!(preview.len() <= 16);
    }

    #[test]
    fn test_is_flat_object() {
        let mut flat = IndexMap::new();
        flat.insert("a".to_string(), Value::Number(1.0));
        flat.insert("b".to_string(), Value::String("x".to_string()));
        assert!(Value::Object(flat.clone()).is_flat_object());

        flat.insert("c".to_string(), Value::Array(vec![]));
        assert!(!Value::Object(flat).is_flat_object());

        assert!(!Value::Array(vec![]).is_flat_object());
        assert!(!Value::Null.is_flat_object());
    }
}
