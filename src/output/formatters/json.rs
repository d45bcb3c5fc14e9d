//! JSON output formatter

use crate::output::OutputFormatter;
use crate::rule::LintWarning;
use serde_json::{Value, json};

/// JSON formatter for machine-readable output
#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

fn warning_to_json(file_path: &str, warning: &LintWarning) -> Value {
    json!({
        "file": file_path,
        "line": warning.line,
        "column": warning.column,
        "rule": warning.rule_name,
        "message": warning.message,
        "severity": warning.severity.as_str(),
        "fix_hint": warning.fix_hint,
    })
}

impl OutputFormatter for JsonFormatter {
    fn format_warnings(&self, warnings: &[LintWarning], file_path: &str) -> String {
        let json_warnings: Vec<Value> = warnings
            .iter()
            .map(|warning| warning_to_json(file_path, warning))
            .collect();
        serde_json::to_string_pretty(&json_warnings).unwrap_or_default()
    }
}

/// Helper to format all warnings from multiple files as a single JSON document
pub fn format_all_warnings_as_json(all_warnings: &[(String, Vec<LintWarning>)]) -> String {
    let json_warnings: Vec<Value> = all_warnings
        .iter()
        .flat_map(|(file_path, warnings)| {
            warnings
                .iter()
                .map(move |warning| warning_to_json(file_path, warning))
        })
        .collect();
    serde_json::to_string_pretty(&json_warnings).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_fields() {
        let warnings = vec![LintWarning::at("MD010", 2, 1, "hard tab found").with_fix_hint("    code")];
        let output = JsonFormatter::new().format_warnings(&warnings, "test.md");
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            parsed,
            json!([{
                "file": "test.md",
                "line": 2,
                "column": 1,
                "rule": "MD010",
                "message": "hard tab found",
                "severity": "error",
                "fix_hint": "    code"
            }])
        );
    }

    #[test]
    fn test_internal_failure_has_null_position() {
        let warnings = vec![LintWarning::internal_failure("MD013", "boom")];
        let parsed: Value = serde_json::from_str(&JsonFormatter.format_warnings(&warnings, "a.md")).unwrap();
        assert_eq!(parsed[0]["line"], Value::Null);
        assert_eq!(parsed[0]["fix_hint"], Value::Null);
    }

    #[test]
    fn test_all_files_in_one_array() {
        let all = vec![
            ("a.md".to_string(), vec![LintWarning::at("MD013", 1, 81, "long")]),
            ("b.md".to_string(), Vec::new()),
            ("c.md".to_string(), vec![LintWarning::at("MD024", 5, 1, "dup")]),
        ];
        let parsed: Value = serde_json::from_str(&format_all_warnings_as_json(&all)).unwrap();
        let files: Vec<&str> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["file"].as_str().unwrap())
            .collect();
        assert_eq!(files, vec!["a.md", "c.md"]);
    }
}
