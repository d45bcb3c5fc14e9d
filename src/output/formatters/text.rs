//! Default text output formatter with colors

use crate::output::{OutputFormatter, location};
use crate::rule::LintWarning;
use colored::*;

/// Default human-readable formatter with colors
pub struct TextFormatter {
    use_colors: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_warnings(&self, warnings: &[LintWarning], file_path: &str) -> String {
        warnings
            .iter()
            .map(|warning| {
                let location = location(file_path, warning);
                let rule = format!("[{}]", warning.rule_name);
                let fix_indicator = if warning.fix_hint.is_some() { " [*]" } else { "" };
                if self.use_colors {
                    format!(
                        "{}: {} {}{}",
                        location.blue().underline(),
                        rule.yellow(),
                        warning.message,
                        fix_indicator.green()
                    )
                } else {
                    format!("{location}: {rule} {}{fix_indicator}", warning.message)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_summary(&self, files_processed: usize, total_warnings: usize, truncated: bool) -> Option<String> {
        let files = if files_processed == 1 { "file" } else { "files" };
        let mut summary = if total_warnings == 0 {
            let text = format!("Success: No issues found in {files_processed} {files}");
            if self.use_colors { text.green().to_string() } else { text }
        } else {
            let issues = if total_warnings == 1 { "issue" } else { "issues" };
            let text = format!("Found {total_warnings} {issues} in {files_processed} {files}");
            if self.use_colors { text.red().bold().to_string() } else { text }
        };
        if truncated {
            summary.push_str(" (truncated: deadline reached)");
        }
        Some(summary)
    }

    fn use_colors(&self) -> bool {
        self.use_colors
    }
}
