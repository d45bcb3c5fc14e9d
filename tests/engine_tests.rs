use std::time::Duration;

use mdcheck_lib::config::{ConfigFormat, parse_user_config};
use mdcheck_lib::{LintOptions, LintWarning, RuleRegistry, UserConfig, lint, resolve};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn default_lint(content: &str) -> Vec<LintWarning> {
    let registry = RuleRegistry::builtin();
    let resolved = resolve(&registry, &UserConfig::default()).unwrap();
    lint(content, &registry, &resolved, &LintOptions::default()).warnings
}

#[test]
fn test_end_to_end_hard_tab_example() {
    let warnings = default_lint("# Title\n\tcode\n");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].rule_name, "MD010");
    assert_eq!(warnings[0].message, "hard tab found");
}

#[test]
fn test_report_sorted_by_line_then_rule() {
    let content = format!(
        "# Notes\n\n-  item\twith tab {}\n\n# Notes\n",
        "x".repeat(80)
    );
    let warnings = default_lint(&content);
    let order: Vec<(Option<usize>, &str)> = warnings.iter().map(|w| (w.line, w.rule_name)).collect();
    assert_eq!(
        order,
        vec![
            (Some(3), "MD010"),
            (Some(3), "MD013"),
            (Some(3), "MD030"),
            (Some(5), "MD024"),
        ]
    );
}

#[test]
fn test_sample_configuration_file() {
    let yaml = "\
default: true
MD007:
  indent: 4
MD010:
  code_blocks: false
MD013: false
MD024:
  siblings_only: true
MD030:
  ul_single: 1
  ol_single: 1
  ul_multi: 1
  ol_multi: 1
";
    let registry = RuleRegistry::builtin();
    let user = parse_user_config(yaml, ConfigFormat::Yaml).unwrap();
    let resolved = resolve(&registry, &user).unwrap();
    assert!(!resolved.is_enabled("MD013"));

    let content = format!(
        "# A\n\n## Overview\n\n# B\n\n## Overview\n\n- a\n    - b\n\n```\n\tcode\n```\n\n{}\n",
        "z".repeat(120)
    );
    let report = lint(&content, &registry, &resolved, &LintOptions::default());
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    assert!(!report.truncated);
}

#[test]
fn test_zero_deadline_truncates() {
    let registry = RuleRegistry::builtin();
    let resolved = resolve(&registry, &UserConfig::default()).unwrap();
    let options = LintOptions {
        deadline: Some(Duration::ZERO),
    };
    let report = lint("# Title\n\tcode\n", &registry, &resolved, &options);
    assert!(report.truncated);
    assert!(report.warnings.is_empty());
    assert_eq!(report.skipped_rules, vec!["MD007", "MD010", "MD013", "MD024", "MD030"]);
}

#[test]
fn test_generous_deadline_is_not_truncated() {
    let registry = RuleRegistry::builtin();
    let resolved = resolve(&registry, &UserConfig::default()).unwrap();
    let options = LintOptions {
        deadline: Some(Duration::from_secs(60)),
    };
    let report = lint("# Title\n\tcode\n", &registry, &resolved, &options);
    assert!(!report.truncated);
    assert!(report.skipped_rules.is_empty());
    assert_eq!(report.summary().total, 1);
}

#[test]
fn test_custom_registry_subset() {
    let registry = RuleRegistry::new(vec![Box::new(mdcheck_lib::rules::MD013LineLength)]);
    let resolved = resolve(&registry, &UserConfig::default()).unwrap();
    let report = lint("\tx\n", &registry, &resolved, &LintOptions::default());
    assert!(report.warnings.is_empty());
    assert_eq!(resolved.rules.len(), 1);
}

fn markdown_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("```".to_string()),
        Just("~~~rust".to_string()),
        Just("---".to_string()),
        "#{1,7} [A-Za-z ]{0,12}",
        "[ \t]{0,6}[-*+] [a-z\t ]{1,20}",
        "[ ]{0,4}[0-9]{1,3}[.)] {1,4}[a-z]{1,10}",
        "[=-]{1,5}",
        "[a-zA-Z \t#*`~-]{0,100}",
    ]
}

fn markdown_document() -> impl Strategy<Value = String> {
    prop::collection::vec(markdown_line(), 0..40).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn lint_is_deterministic(content in markdown_document()) {
        let first = default_lint(&content);
        let second = default_lint(&content);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn default_false_reports_nothing(content in markdown_document()) {
        let registry = RuleRegistry::builtin();
        let resolved = resolve(&registry, &UserConfig::new().with_default(false)).unwrap();
        let report = lint(&content, &registry, &resolved, &LintOptions::default());
        prop_assert!(report.warnings.is_empty());
        prop_assert!(!report.truncated);
    }

    #[test]
    fn tabs_inside_fences_respect_code_blocks_option(body in "[a-z]{0,8}\t[a-z]{0,8}") {
        let registry = RuleRegistry::builtin();
        let user = parse_user_config("default: false\nMD010:\n  code_blocks: false\n", ConfigFormat::Yaml).unwrap();
        let resolved = resolve(&registry, &user).unwrap();

        let fenced = format!("```\n{body}\n```\n");
        let report = lint(&fenced, &registry, &resolved, &LintOptions::default());
        prop_assert!(report.warnings.is_empty());

        let report = lint(&format!("{body}\n"), &registry, &resolved, &LintOptions::default());
        prop_assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn every_warning_has_a_known_rule_and_valid_line(content in markdown_document()) {
        let line_count = content.lines().count().max(1);
        for warning in default_lint(&content) {
            prop_assert!(["MD007", "MD010", "MD013", "MD024", "MD030"].contains(&warning.rule_name));
            let line = warning.line.expect("built-in rules report positions");
            prop_assert!(line >= 1 && line <= line_count);
        }
    }
}
