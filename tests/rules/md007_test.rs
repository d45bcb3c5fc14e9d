use crate::common::{check_rule, lines};

#[test]
fn test_valid_nested_list() {
    let content = "\
* Item 1
  * Nested 1
    * Deep
  * Nested 2
* Item 2
";
    assert!(check_rule("MD007", content, "").is_empty());
}

#[test]
fn test_nested_item_under_top_level_parent() {
    let cases: [(&str, &[usize]); 3] = [("    - b\n", &[]), ("   - b\n", &[2]), ("     - b\n", &[2])];
    for (child, expected) in cases {
        let report = crate::common::lint_with_yaml(&format!("- a\n{child}"), "default: false\nMD007:\n  indent: 2\n");
        assert_eq!(lines(&report.warnings), expected.to_vec(), "input {child:?}");
    }
}

#[test]
fn test_grandchild_relative_to_nested_parent() {
    let base = "* top\n  * depth one\n";
    assert!(check_rule("MD007", &format!("{base}    * nested\n"), "indent: 2").is_empty());

    for bad in ["   * nested\n", "     * nested\n"] {
        let result = check_rule("MD007", &format!("{base}{bad}"), "indent: 2");
        assert_eq!(lines(&result), vec![3], "input {bad:?}");
    }
}

#[test]
fn test_indent_four() {
    let content = "- a\n    - b\n        - c\n  - wrong\n";
    let result = check_rule("MD007", content, "indent: 4");
    assert_eq!(lines(&result), vec![4]);
    assert_eq!(result[0].fix_hint.as_deref(), Some("    - wrong"));
}

#[test]
fn test_lists_separated_by_paragraph_are_independent() {
    let content = "* a\n  * b\n\nParagraph\n\n   * starts a new top-level list\n";
    assert!(check_rule("MD007", content, "").is_empty());
}

#[test]
fn test_tab_indented_child() {
    // A tab expands to column 4, so the child sits 4 columns right of its parent
    let content = "* a\n\t* b\n";
    assert!(check_rule("MD007", content, "").is_empty());
    assert!(check_rule("MD007", content, "indent: 4").is_empty());
    assert_eq!(lines(&check_rule("MD007", content, "indent: 3")), vec![2]);
}

#[test]
fn test_alias_key_configures_rule() {
    let report = crate::common::lint_with_yaml("- a\n    - b\n", "default: false\nul-indent:\n  indent: 4\n");
    assert!(report.warnings.is_empty());
}
