//! JSON validation with line/column error positions.

use serde::Serialize;

/// Where and why validation failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

/// Result of validating one input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

/// Checks whether the input is valid JSON.
///
/// On failure the report carries serde_json's message along with the 1-based
/// line and column of the offending position.
pub fn validate(input: &str) -> ValidationReport {
    match crate::parser::parse_json(input) {
        Ok(_) => ValidationReport {
            valid: true,
            error: None,
        },
        Err(e) => ValidationReport {
            valid: false,
            error: Some(ValidationError {
                message: e.to_string(),
                line: e.line(),
                column: e.column(),
            }),
        },
    }
}
