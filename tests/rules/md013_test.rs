use crate::common::{check_rule, lint_with_yaml, lines};

#[test]
fn test_default_limit_is_80() {
    let content = format!("{}\n{}\n", "a".repeat(80), "b".repeat(81));
    let result = check_rule("MD013", &content, "");
    assert_eq!(lines(&result), vec![2]);
    assert_eq!(result[0].column, Some(81));
}

#[test]
fn test_custom_limit() {
    let content = "short line\nthis line is a bit longer\n";
    assert_eq!(lines(&check_rule("MD013", content, "line_length: 12")), vec![2]);
}

#[test]
fn test_boolean_false_ignores_options() {
    let content = format!("{}\n", "x".repeat(200));
    let report = lint_with_yaml(&content, "MD013: false\n");
    assert!(report.warnings.iter().all(|w| w.rule_name != "MD013"));

    // An options mapping elsewhere in the file does not re-enable it
    let report = lint_with_yaml(&content, "line-length:\n  line_length: 10\nMD013: false\n");
    assert!(report.warnings.iter().all(|w| w.rule_name != "MD013"));
}

#[test]
fn test_code_blocks_and_headings() {
    let long = "y".repeat(30);
    let content = format!("# {long}\n\n```\n{long}\n```\n\n{long}\n");
    assert_eq!(lines(&check_rule("MD013", &content, "line_length: 20")), vec![1, 4, 7]);
    assert_eq!(
        lines(&check_rule("MD013", &content, "line_length: 20\ncode_blocks: false\nheadings: false")),
        vec![7]
    );
}
