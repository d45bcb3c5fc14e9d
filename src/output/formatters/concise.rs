//! Concise output formatter for easy parsing by editors

use crate::output::{OutputFormatter, location};
use crate::rule::LintWarning;

/// Concise formatter: file:line:col: [RULE] message
#[derive(Default)]
pub struct ConciseFormatter;

impl ConciseFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for ConciseFormatter {
    fn format_warnings(&self, warnings: &[LintWarning], file_path: &str) -> String {
        warnings
            .iter()
            .map(|warning| {
                format!(
                    "{}: [{}] {}",
                    location(file_path, warning),
                    warning.rule_name,
                    warning.message
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
