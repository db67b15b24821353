//! jsonkit - command-line JSON utilities.
//!
//! This library provides the pure cores behind the `jsonkit` CLI: parsing
//! JSON into an ordered value tree, structural diffing of two documents,
//! conversion to CSV/XML/YAML, pretty-printing/minification, validation with
//! error positions, and a textual tree view.
//!
//! # Example
//!
//! ```
//! use jsonkit::{compute_diff, convert, parse_json, Target};
//!
//! let old = parse_json(r#"{"a": 1}"#)?;
//! let new = parse_json(r#"{"a": 1, "b": 2}"#)?;
//!
//! let entries = compute_diff(&old, &new);
//! assert_eq!(entries.len(), 1);
//!
//! let yaml = convert(&new, Target::Yaml).unwrap();
//! assert!(yaml.contains("b: 2"));
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod api;
pub mod convert;
pub mod diff;
pub mod error;
pub mod format;
pub mod output;
pub mod parser;
pub mod tree;
pub mod validate;
pub mod value;

// Re-export commonly used types for convenience
pub use api::{handle_convert, ConvertRequest, ConvertResponse};
pub use convert::{convert, Target};
pub use diff::{compute_diff, DiffEntry, DiffKind, DiffStats};
pub use error::{ConvertError, JsonkitError, OutputError, ParseError};
pub use format::{to_minified, to_pretty};
pub use output::{format_diff, OutputFormat, OutputOptions};
pub use parser::{parse_file, parse_json, parse_stdin};
pub use tree::render_tree;
pub use validate::{validate, ValidationError, ValidationReport};
pub use value::Value;
