//! Integration tests for pretty-printing, minification, and validation.

use jsonkit::{parse_json, to_minified, to_pretty, validate};

#[test]
fn test_pretty_print_with_each_indent_width() {
    let value = parse_json(r#"{"a": 1}"#).unwrap();
    assert_eq!(to_pretty(&value, 2).unwrap(), "{\n  \"a\": 1\n}");
    assert_eq!(to_pretty(&value, 3).unwrap(), "{\n   \"a\": 1\n}");
    assert_eq!(to_pretty(&value, 4).unwrap(), "{\n    \"a\": 1\n}");
}

#[test]
fn test_format_round_trip_idempotence() {
    let inputs = [
        "null",
        "true",
        "-3.5",
        "\"text with \\\"quotes\\\"\"",
        "[]",
        "{}",
        r#"{"users": [{"name": "Alice", "tags": ["a", "b"], "meta": null}], "total": 2}"#,
    ];
    for input in inputs {
        let value = parse_json(input).unwrap();
        let pretty = to_pretty(&value, 2).unwrap();
        let reparsed = parse_json(&pretty).unwrap();
        assert_eq!(reparsed, value, "pretty round-trip failed for {}", input);

        // Formatting the reparsed value again yields the same text.
        assert_eq!(to_pretty(&reparsed, 2).unwrap(), pretty);
    }
}

#[test]
fn test_minify_strips_whitespace() {
    let value = parse_json("{\n    \"a\" : [ 1 , 2 ] \n}").unwrap();
    assert_eq!(to_minified(&value).unwrap(), r#"{"a":[1,2]}"#);
}

#[test]
fn test_validate_accepts_valid_json() {
    for input in ["null", "[1, 2]", r#"{"a": {"b": []}}"#, "\"ok\""] {
        let report = validate(input);
        assert!(report.valid, "expected {} to validate", input);
        assert!(report.error.is_none());
    }
}

#[test]
fn test_validate_rejects_invalid_json() {
    for input in ["{", "[1, 2,]", "{'single': 'quotes'}", "undefined"] {
        let report = validate(input);
        assert!(!report.valid, "expected {} to fail validation", input);
        let error = report.error.unwrap();
        assert!(error.line >= 1);
        assert!(error.column >= 1);
        assert!(!error.message.is_empty());
    }
}

#[test]
fn test_validate_error_position_on_later_line() {
    let report = validate("{\n  \"a\": 1,\n  \"b\": oops\n}");
    let error = report.error.unwrap();
    assert_eq!(error.line, 3);
}
