//! Output formatting module for mdcheck
//!
//! This module renders lint reports as human-readable text, concise editor-friendly
//! lines, or JSON.

use crate::rule::LintWarning;
use std::io::{self, Write};
use std::str::FromStr;

pub mod formatters;

// Re-export formatters
pub use formatters::*;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a collection of warnings for output
    fn format_warnings(&self, warnings: &[LintWarning], file_path: &str) -> String;

    /// Format a summary of results across multiple files
    fn format_summary(&self, _files_processed: usize, _total_warnings: usize, _truncated: bool) -> Option<String> {
        // Default: no summary
        None
    }

    /// Whether this formatter should use colors
    fn use_colors(&self) -> bool {
        false
    }
}

/// `file:line:col`, shortened when the warning has no position
pub(crate) fn location(file_path: &str, warning: &LintWarning) -> String {
    match (warning.line, warning.column) {
        (Some(line), Some(column)) => format!("{file_path}:{line}:{column}"),
        (Some(line), None) => format!("{file_path}:{line}"),
        _ => file_path.to_string(),
    }
}

/// Available output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Default human-readable format with colors and a summary
    #[default]
    Text,
    /// Concise format: file:line:col: [RULE] message
    Concise,
    /// JSON array of warnings
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "full" => Ok(OutputFormat::Text),
            "concise" => Ok(OutputFormat::Concise),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl OutputFormat {
    /// Create a formatter instance for this format
    pub fn create_formatter(&self, use_colors: bool) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text if use_colors => Box::new(TextFormatter::new()),
            OutputFormat::Text => Box::new(TextFormatter::without_colors()),
            OutputFormat::Concise => Box::new(ConciseFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

/// Output writer that handles stdout/stderr routing
pub struct OutputWriter {
    quiet: bool,
}

impl OutputWriter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Write a line to stdout, unless quiet
    pub fn writeln(&self, content: &str) -> io::Result<()> {
        if self.quiet || content.is_empty() {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{content}")?;
        stdout.flush()
    }

    /// Write error output (always to stderr)
    pub fn write_error(&self, content: &str) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{content}")
    }
}
