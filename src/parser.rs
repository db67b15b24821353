//! JSON parsing into the [`Value`] tree.
//!
//! All parsing goes through serde_json; the `preserve_order` feature keeps
//! object keys in document order, which matters for CSV header derivation
//! and for display.

use crate::error::ParseError;
use crate::value::Value;
use indexmap::IndexMap;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Parses a JSON string into a [`Value`].
///
/// # Examples
///
/// ```
/// use jsonkit::parse_json;
///
/// let value = parse_json(r#"{"name": "Alice", "age": 30}"#).unwrap();
/// assert_eq!(value.type_name(), "object");
/// ```
pub fn parse_json(content: &str) -> Result<Value, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    Ok(json_to_value(value))
}

/// Parses a JSON file into a [`Value`].
///
/// # Errors
///
/// Returns a [`ParseError`] if the file does not exist, cannot be read, or
/// does not contain valid JSON.
pub fn parse_file(path: &Path) -> Result<Value, ParseError> {
    if !path.exists() {
        return Err(ParseError::file_not_found(
            path.to_string_lossy().to_string(),
        ));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ParseError::read_error(path.to_string_lossy().to_string(), e))?;

    parse_json(&content)
        .map_err(|e| ParseError::json_error(path.to_string_lossy().to_string(), e))
}

/// Reads stdin to end and parses it as JSON.
pub fn parse_stdin() -> Result<Value, ParseError> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .map_err(|source| ParseError::StdinError { source })?;

    parse_json(&content).map_err(|e| ParseError::json_error("<stdin>", e))
}

/// Converts a serde_json::Value into our representation, keeping key order.
fn json_to_value(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => {
            Value::Array(arr.into_iter().map(json_to_value).collect())
        }
        serde_json::Value::Object(obj) => {
            let map: IndexMap<String, Value> = obj
                .into_iter()
                .map(|(k, v)| (k, json_to_value(v)))
                .collect();
            Value::Object(map)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_json_primitives() {
        assert_eq!(parse_json("null").unwrap(), Value::Null);
        assert_eq!(parse_json("true").unwrap(), Value::Bool(true));
        assert_eq!(parse_json("false").unwrap(), Value::Bool(false));
        assert_eq!(parse_json("42").unwrap(), Value::Number(42.0));
        assert_eq!(parse_json("3.15").unwrap(), Value::Number(3.15));
        assert_eq!(
            parse_json(r#""hello""#).unwrap(),
            Value::String("hello".to_string())
        );
    }

    #[test]
    fn test_parse_json_array() {
        let node = parse_json("[1, 2, 3]").unwrap();
        match node {
            Value::Array(arr) => {
                assert_eq!(arr.len(), 3);
                assert_eq!(arr[0], Value::Number(1.0));
                assert_eq!(arr[2], Value::Number(3.0));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_parse_json_object_preserves_key_order() {
        let node = parse_json(r#"{"zebra": 1, "apple": 2, "mango": 3}"#).unwrap();
        match node {
            Value::Object(map) => {
                let keys: Vec<&String> = map.keys().collect();
                assert_eq!(keys, vec!["zebra", "apple", "mango"]);
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_parse_json_nested() {
        let node = parse_json(r#"{"user": {"name": "Bob", "scores": [10, 20, 30]}}"#).unwrap();
        match node {
            Value::Object(map) => match map.get("user").unwrap() {
                Value::Object(user) => {
                    assert_eq!(user.get("name").unwrap(), &Value::String("Bob".to_string()));
                    match user.get("scores").unwrap() {
                        Value::Array(scores) => assert_eq!(scores.len(), 3),
                        _ => panic!("Expected scores to be array"),
                    }
                }
                _ => panic!("Expected user to be object"),
            },
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_parse_json_invalid() {
        assert!(parse_json("{invalid json}").is_err());
        assert!(parse_json("[1, 2,]").is_err());
        assert!(parse_json("").is_err());
    }

    #[test]
    fn test_parse_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"key": "value"}}"#).unwrap();

        let node = parse_file(file.path()).unwrap();
        match node {
            Value::Object(map) => {
                assert_eq!(map.get("key").unwrap(), &Value::String("value".to_string()));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_parse_file_not_found() {
        let result = parse_file(Path::new("/nonexistent/file.json"));
        match result.unwrap_err() {
            ParseError::FileNotFound { .. } => {}
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_file_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json at all").unwrap();

        let result = parse_file(file.path());
        match result.unwrap_err() {
            ParseError::JsonError { .. } => {}
            other => panic!("Expected JsonError, got {:?}", other),
        }
    }
}
