//! Conversion of a JSON value into CSV, XML, or YAML text.
//!
//! Each target has its own structural mapping rules from the nested JSON
//! shape to the flat or nested target shape. Conversion never produces
//! partial output: a shape mismatch fails with a descriptive error before
//! anything is emitted.
//!
//! # Examples
//!
//! ```
//! use jsonkit::{convert, parse_json, Target};
//!
//! let value = parse_json(r#"[{"a": 1, "b": 2}, {"a": 3, "b": 4}]"#).unwrap();
//! let csv = convert(&value, Target::Csv).unwrap();
//! assert_eq!(csv, "a,b\n1,2\n3,4");
//! ```

use crate::error::ConvertError;
use crate::value::{number_text, Value};
use serde::{Deserialize, Serialize};

const CSV_SHAPE_ERROR: &str = "CSV conversion requires a JSON array of objects";

/// The output text format for conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Csv,
    Xml,
    Yaml,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Csv => "csv",
            Target::Xml => "xml",
            Target::Yaml => "yaml",
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializes a value into the requested target format.
pub fn convert(value: &Value, target: Target) -> Result<String, ConvertError> {
    match target {
        Target::Csv => to_csv(value),
        Target::Xml => Ok(to_xml(value)),
        Target::Yaml => to_yaml(value),
    }
}

/// CSV mapping: the root must be an array of objects, or a single flat
/// object.
///
/// For an array, the header row comes from the first element's keys in
/// stored order; every row emits cells for exactly those headers, with
/// missing keys rendering as empty cells. String cells are wrapped in double
/// quotes (embedded quotes doubled); other scalars use their natural text
/// form. A nested array or object in a cell is a shape error.
fn to_csv(value: &Value) -> Result<String, ConvertError> {
    match value {
        Value::Array(rows) => {
            if rows.is_empty() {
                return Ok(String::new());
            }

            let headers: Vec<&str> = match &rows[0] {
                Value::Object(map) => map.keys().map(String::as_str).collect(),
                _ => return Err(ConvertError::shape(CSV_SHAPE_ERROR)),
            };

            let mut lines = Vec::with_capacity(rows.len() + 1);
            lines.push(headers.join(","));

            for row in rows {
                let map = match row {
                    Value::Object(map) => map,
                    _ => return Err(ConvertError::shape(CSV_SHAPE_ERROR)),
                };
                let cells: Vec<String> = headers
                    .iter()
                    .map(|header| csv_cell(map.get(*header)))
                    .collect::<Result<_, _>>()?;
                lines.push(cells.join(","));
            }

            Ok(lines.join("\n"))
        }
        Value::Object(map) => {
            if !value.is_flat_object() {
                return Err(ConvertError::shape(CSV_SHAPE_ERROR));
            }
            let headers: Vec<&str> = map.keys().map(String::as_str).collect();
            let cells: Vec<String> = map
                .values()
                .map(|v| csv_cell(Some(v)))
                .collect::<Result<_, _>>()?;
            Ok(format!("{}\n{}", headers.join(","), cells.join(",")))
        }
        _ => Err(ConvertError::shape(CSV_SHAPE_ERROR)),
    }
}

fn csv_cell(value: Option<&Value>) -> Result<String, ConvertError> {
    match value {
        // Missing keys and nulls both render as empty cells
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(Value::Number(n)) => Ok(number_text(*n)),
        Some(Value::String(s)) => Ok(format!("\"{}\"", s.replace('"', "\"\""))),
        Some(Value::Array(_)) | Some(Value::Object(_)) => {
            Err(ConvertError::shape(CSV_SHAPE_ERROR))
        }
    }
}

/// XML mapping: every value becomes an element. Null is a self-closing empty
/// element, primitives carry text content, objects nest child elements named
/// by key, and arrays repeat `<item>` elements without an extra wrapper.
/// JSON has no root name, so the root element is always `root`.
fn to_xml(value: &Value) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}",
        xml_element(value, "root", 0)
    )
}

fn xml_element(value: &Value, name: &str, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    match value {
        Value::Null => format!("{}<{}/>", indent, name),
        Value::Bool(b) => format!("{}<{}>{}</{}>", indent, name, b, name),
        Value::Number(n) => format!("{}<{}>{}</{}>", indent, name, number_text(*n), name),
        Value::String(s) => format!("{}<{}>{}</{}>", indent, name, escape_xml_text(s), name),
        Value::Array(items) => items
            .iter()
            .map(|item| xml_element(item, "item", depth))
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Object(map) => {
            if map.is_empty() {
                return format!("{}<{}/>", indent, name);
            }
            let children = map
                .iter()
                .map(|(key, child)| xml_element(child, key, depth + 1))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{}<{}>\n{}\n{}</{}>", indent, name, children, indent, name)
        }
    }
}

fn escape_xml_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// YAML mapping: a direct structural transform in block style with 2-space
/// indentation. YAML's data model is a superset of JSON's, so nothing is
/// lost and the output parses back to a structurally equal value.
fn to_yaml(value: &Value) -> Result<String, ConvertError> {
    Ok(serde_yaml::to_string(value)?)
}
