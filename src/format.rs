//! Pretty-printing and minification of JSON values.

use crate::error::OutputError;
use crate::value::Value;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Pretty-prints a value with the given indent width, preserving object key
/// order.
///
/// # Examples
///
/// ```
/// use jsonkit::{parse_json, to_pretty};
///
/// let value = parse_json(r#"{"a":1}"#).unwrap();
/// assert_eq!(to_pretty(&value, 2).unwrap(), "{\n  \"a\": 1\n}");
/// ```
pub fn to_pretty(value: &Value, indent: usize) -> Result<String, OutputError> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(|source| OutputError::JsonSerializationError { source })?;
    Ok(String::from_utf8(buf).expect("serde_json emits valid UTF-8"))
}

/// Serializes a value in compact form, with no whitespace.
pub fn to_minified(value: &Value) -> Result<String, OutputError> {
    serde_json::to_string(value).map_err(|source| OutputError::JsonSerializationError { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_json;

    #[test]
    fn test_pretty_two_space_indent() {
        let value = parse_json(r#"{"a": 1, "b": [true, null]}"#).unwrap();
        assert_eq!(
            to_pretty(&value, 2).unwrap(),
            "{\n  \"a\": 1,\n  \"b\": [\n    true,\n    null\n  ]\n}"
        );
    }

    #[test]
    fn test_pretty_four_space_indent() {
        let value = parse_json(r#"{"a": 1}"#).unwrap();
        assert_eq!(to_pretty(&value, 4).unwrap(), "{\n    \"a\": 1\n}");
    }

    #[test]
    fn test_pretty_preserves_key_order() {
        let value = parse_json(r#"{"zebra": 1, "apple": 2}"#).unwrap();
        let pretty = to_pretty(&value, 2).unwrap();
        let zebra = pretty.find("zebra").unwrap();
        let apple = pretty.find("apple").unwrap();
        assert!(zebra < apple);
    }

    #[test]
    fn test_minify() {
        let value = parse_json("{\n  \"a\": 1,\n  \"b\": [1, 2]\n}").unwrap();
        assert_eq!(to_minified(&value).unwrap(), r#"{"a":1,"b":[1,2]}"#);
    }

    #[test]
    fn test_round_trip_is_structurally_equal() {
        let inputs = [
            "null",
            "[1, 2.5, \"x\", false]",
            r#"{"a": {"b": [null, {"c": 1}]}}"#,
        ];
        for input in inputs {
            let value = parse_json(input).unwrap();
            let pretty = to_pretty(&value, 3).unwrap();
            assert_eq!(parse_json(&pretty).unwrap(), value);

            let minified = to_minified(&value).unwrap();
            assert_eq!(parse_json(&minified).unwrap(), value);
        }
    }
}
