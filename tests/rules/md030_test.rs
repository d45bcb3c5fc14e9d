use crate::common::{check_rule, lines};

#[test]
fn test_single_space_default() {
    let content = "- one\n- two\n\n1. first\n2. second\n";
    assert!(check_rule("MD030", content, "").is_empty());
}

#[test]
fn test_extra_spaces() {
    let content = "-  one\n*   two\n1.  first\n";
    let result = check_rule("MD030", content, "");
    assert_eq!(lines(&result), vec![1, 2, 3]);
    assert_eq!(result[2].fix_hint.as_deref(), Some("1. first"));
}

#[test]
fn test_single_and_multi_options() {
    let options = "ul_single: 1\nul_multi: 3\nol_single: 2\nol_multi: 2";
    let content = "\
- short
-   wrapped item
    with continuation
1.  ordered
";
    assert!(check_rule("MD030", content, options).is_empty());

    let content = "- wrapped item\n  with continuation\n";
    let result = check_rule("MD030", content, options);
    assert_eq!(lines(&result), vec![1]);
    assert_eq!(result[0].message, "Expected 3 spaces after list marker, found 1");
}

#[test]
fn test_blank_separated_paragraph_makes_item_multi() {
    let options = "ul_multi: 2";
    let content = "-  item\n\n   second paragraph\n- next\n";
    assert!(check_rule("MD030", content, options).is_empty());
}

#[test]
fn test_zero_is_rejected() {
    let registry = mdcheck_lib::RuleRegistry::builtin();
    let user = mdcheck_lib::config::parse_user_config(
        "MD030:\n  ol_multi: 0\n",
        mdcheck_lib::config::ConfigFormat::Yaml,
    )
    .unwrap();
    let err = mdcheck_lib::resolve(&registry, &user).unwrap_err();
    assert_eq!(err.rule(), Some("MD030"));
}
