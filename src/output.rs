//! Rendering of diff results.
//!
//! Supports colored terminal output, plain text for piping, and a JSON
//! representation of the entries plus summary statistics.

use crate::diff::{DiffEntry, DiffKind, DiffStats};
use crate::error::OutputError;
use colored::*;

/// Output format for a rendered diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored terminal output with ANSI escape codes
    Terminal,
    /// JSON representation of the entries and stats
    Json,
    /// Plain text, no colors (suitable for piping)
    Plain,
}

/// Options for controlling diff output.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// Maximum length for displayed values (truncate if longer)
    pub max_value_length: usize,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            max_value_length: 80,
        }
    }
}

/// Formats diff entries according to the specified format and options.
///
/// # Examples
///
/// ```
/// use jsonkit::{compute_diff, format_diff, parse_json, OutputFormat, OutputOptions};
///
/// let old = parse_json(r#"{"age": 30}"#).unwrap();
/// let new = parse_json(r#"{"age": 31}"#).unwrap();
/// let entries = compute_diff(&old, &new);
///
/// let output = format_diff(&entries, &OutputFormat::Plain, &OutputOptions::default()).unwrap();
/// assert!(output.contains("age"));
/// ```
pub fn format_diff(
    entries: &[DiffEntry],
    format: &OutputFormat,
    options: &OutputOptions,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Terminal => Ok(format_terminal(entries, options)),
        OutputFormat::Json => format_json(entries),
        OutputFormat::Plain => Ok(format_plain(entries, options)),
    }
}

fn format_terminal(entries: &[DiffEntry], options: &OutputOptions) -> String {
    if entries.is_empty() {
        return "No changes detected.".dimmed().to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format_entry_terminal(entry, options));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format_summary(&DiffStats::from_entries(entries)));
    output
}

fn format_entry_terminal(entry: &DiffEntry, options: &OutputOptions) -> String {
    let path = display_path(&entry.path);

    match entry.kind {
        DiffKind::Added => {
            let value = preview_of(entry.new.as_ref(), options);
            format!("{} {}: {}", "+".bright_green(), path.green(), value.green())
        }
        DiffKind::Removed => {
            let value = preview_of(entry.old.as_ref(), options);
            format!("{} {}: {}", "-".bright_red(), path.red(), value.red())
        }
        DiffKind::Modified => {
            let old = preview_of(entry.old.as_ref(), options);
            let new = preview_of(entry.new.as_ref(), options);
            format!(
                "{} {}: {} {} {}",
                "•".bright_yellow(),
                path.yellow(),
                old.yellow(),
                "→".bright_yellow(),
                new.yellow()
            )
        }
        DiffKind::TypeChanged => {
            let old_type = type_of(entry.old.as_ref());
            let new_type = type_of(entry.new.as_ref());
            format!(
                "{} {}: {} {} {}",
                "~".bright_cyan(),
                path.cyan(),
                old_type.cyan(),
                "→".bright_cyan(),
                new_type.cyan()
            )
        }
    }
}

fn format_plain(entries: &[DiffEntry], options: &OutputOptions) -> String {
    if entries.is_empty() {
        return "No changes detected.".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format_entry_plain(entry, options));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format_summary(&DiffStats::from_entries(entries)));
    output
}

fn format_entry_plain(entry: &DiffEntry, options: &OutputOptions) -> String {
    let path = display_path(&entry.path);

    match entry.kind {
        DiffKind::Added => {
            format!("+ {}: {}", path, preview_of(entry.new.as_ref(), options))
        }
        DiffKind::Removed => {
            format!("- {}: {}", path, preview_of(entry.old.as_ref(), options))
        }
        DiffKind::Modified => format!(
            "• {}: {} → {}",
            path,
            preview_of(entry.old.as_ref(), options),
            preview_of(entry.new.as_ref(), options)
        ),
        DiffKind::TypeChanged => format!(
            "~ {}: {} → {}",
            path,
            type_of(entry.old.as_ref()),
            type_of(entry.new.as_ref())
        ),
    }
}

fn format_json(entries: &[DiffEntry]) -> Result<String, OutputError> {
    use serde_json::json;

    let mut changes = Vec::with_capacity(entries.len());
    for entry in entries {
        let old = entry
            .old
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|source| OutputError::JsonSerializationError { source })?;
        let new = entry
            .new
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|source| OutputError::JsonSerializationError { source })?;

        changes.push(json!({
            "path": entry.path,
            "type": entry.kind.as_str(),
            "old_value": old,
            "new_value": new,
        }));
    }

    let stats = DiffStats::from_entries(entries);
    let output = json!({
        "changes": changes,
        "stats": {
            "added": stats.added,
            "removed": stats.removed,
            "modified": stats.modified,
            "type_changed": stats.type_changed,
        }
    });

    serde_json::to_string_pretty(&output)
        .map_err(|source| OutputError::JsonSerializationError { source })
}

/// The root path is empty; render it as "(root)".
fn display_path(path: &str) -> String {
    if path.is_empty() {
        "(root)".to_string()
    } else {
        path.to_string()
    }
}

fn preview_of(value: Option<&crate::value::Value>, options: &OutputOptions) -> String {
    // Entries from compute_diff always carry the side their kind requires.
    value
        .map(|v| v.preview(options.max_value_length))
        .unwrap_or_default()
}

fn type_of(value: Option<&crate::value::Value>) -> &'static str {
    value.map(|v| v.type_name()).unwrap_or("unknown")
}

fn format_summary(stats: &DiffStats) -> String {
    if stats.is_empty() {
        return "Summary: No changes".to_string();
    }

    let mut parts = Vec::new();
    if stats.added > 0 {
        parts.push(format!("{} added", stats.added));
    }
    if stats.removed > 0 {
        parts.push(format!("{} removed", stats.removed));
    }
    if stats.modified > 0 {
        parts.push(format!("{} modified", stats.modified));
    }
    if stats.type_changed > 0 {
        parts.push(format!("{} type changed", stats.type_changed));
    }

    format!("Summary: {}", parts.join(", "))
}
