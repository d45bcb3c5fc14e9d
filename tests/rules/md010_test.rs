use crate::common::{check_rule, lines};
use pretty_assertions::assert_eq;

#[test]
fn test_tab_outside_code() {
    let result = check_rule("MD010", "# Title\n\tcode\n", "");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].line, Some(2));
    assert_eq!(result[0].message, "hard tab found");
    assert_eq!(result[0].fix_hint.as_deref(), Some("    code"));
}

#[test]
fn test_code_blocks_false() {
    let content = "Intro\twith tab\n\n```go\nfunc main() {\n\tfmt.Println()\n}\n```\n\nAfter\there\n";
    assert_eq!(lines(&check_rule("MD010", content, "")), vec![1, 5, 9]);
    assert_eq!(lines(&check_rule("MD010", content, "code_blocks: false")), vec![1, 9]);
}

#[test]
fn test_ignore_code_languages() {
    let content = "```makefile\nbuild:\n\tcargo build\n```\n\n~~~python\n\tx = 1\n~~~\n";
    let result = check_rule("MD010", content, "ignore_code_languages:\n  - MakeFile");
    assert_eq!(lines(&result), vec![7]);
}

#[test]
fn test_spaces_per_tab_affects_only_fix_hint() {
    let content = "a\tb\n";
    let two = check_rule("MD010", content, "spaces-per-tab: 2");
    let eight = check_rule("MD010", content, "spaces_per_tab: 8");
    assert_eq!(lines(&two), lines(&eight));
    assert_eq!(two[0].fix_hint.as_deref(), Some("a  b"));
    assert_eq!(eight[0].fix_hint.as_deref(), Some("a        b"));
}

#[test]
fn test_blank_line_with_tab() {
    assert_eq!(lines(&check_rule("MD010", "text\n\t\nmore\n", "")), vec![2]);
}
