//! Request/response contract for the conversion endpoint.
//!
//! The hosting layer owns the actual transport; this module keeps the wire
//! shapes and the handler as pure serde types and a pure function, so any
//! HTTP frontend can expose `POST { input, format } -> { success, output?,
//! error? }` without touching the converter internals.

use crate::convert::{convert, Target};
use crate::parser::parse_json;
use serde::{Deserialize, Serialize};

/// One conversion request: raw JSON text plus a target format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub input: String,
    pub format: Target,
}

/// Outcome of a conversion request. Exactly one of `output` and `error` is
/// set, depending on `success`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConvertResponse {
    fn success(output: String) -> Self {
        Self {
            success: true,
            output: Some(output),
            error: None,
        }
    }

    fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: None,
            error: Some(error.into()),
        }
    }
}

/// Handles one conversion request.
///
/// Invalid JSON input fails before any conversion is attempted; shape errors
/// surface the converter's message. Never panics.
pub fn handle_convert(request: &ConvertRequest) -> ConvertResponse {
    let value = match parse_json(&request.input) {
        Ok(value) => value,
        Err(_) => return ConvertResponse::failure("Invalid JSON input"),
    };

    match convert(&value, request.format) {
        Ok(output) => ConvertResponse::success(output),
        Err(e) => ConvertResponse::failure(e.to_string()),
    }
}
