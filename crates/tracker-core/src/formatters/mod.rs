// ABOUTME: Output format abstraction for rendering training summaries
// ABOUTME: Supports plain text lines (default) and JSON arrays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Renders a list of items either as one human-readable line per item (using
//! the item's `Display` impl) or as a pretty-printed JSON array.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tracker_core::formatters::{format_output, OutputFormat};
//!
//! let output = format_output(&messages, OutputFormat::Text)?;
//! println!("{}", output.data);
//! ```

use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::fmt::Display;

use crate::errors::AppError;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One human-readable line per item (default)
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

impl OutputFormat {
    /// Parse format from a string parameter (case-insensitive)
    ///
    /// Returns `None` for unrecognized values so callers can report them.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Json => "application/json",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the rendered data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered data
    pub data: String,
    /// The format used
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl Error for FormatError {}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.to_string())
    }
}

/// Render items in the requested output format
///
/// Text output joins each item's `Display` rendering with newlines and has no
/// trailing newline. JSON output is a pretty-printed array.
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails.
pub fn format_output<T: Serialize + Display>(
    items: &[T],
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(items).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[derive(Serialize)]
    struct Line(&'static str);

    impl Display for Line {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    #[test]
    fn test_from_str_param() {
        assert_eq!(OutputFormat::from_str_param("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str_param("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_str_param("toon"), None);
    }

    #[test]
    fn test_text_output_joins_lines() {
        let output = format_output(&[Line("a"), Line("b")], OutputFormat::Text).unwrap();
        assert_eq!(output.data, "a\nb");
        assert_eq!(output.content_type, "text/plain; charset=utf-8");
    }

    #[test]
    fn test_json_output_is_array() {
        let output = format_output(&[Line("a")], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output.data).unwrap();
        assert_eq!(value, serde_json::json!(["a"]));
    }
}
