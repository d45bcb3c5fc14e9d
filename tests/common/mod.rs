use mdcheck_lib::config::{ConfigFormat, parse_user_config};
use mdcheck_lib::{LintOptions, LintReport, LintWarning, RuleRegistry, lint, resolve};

/// Lint `content` with a YAML config, resolved strictly
pub fn lint_with_yaml(content: &str, yaml: &str) -> LintReport {
    let registry = RuleRegistry::builtin();
    let user = parse_user_config(yaml, ConfigFormat::Yaml).expect("valid config");
    let resolved = resolve(&registry, &user).expect("config resolves");
    lint(content, &registry, &resolved, &LintOptions::default())
}

/// Warnings of a single rule, with every other rule disabled
pub fn check_rule(rule: &str, content: &str, options_yaml: &str) -> Vec<LintWarning> {
    let yaml = if options_yaml.trim().is_empty() {
        format!("default: false\n{rule}: true\n")
    } else {
        let indented: String = options_yaml.lines().map(|line| format!("  {line}\n")).collect();
        format!("default: false\n{rule}:\n{indented}")
    };
    let report = lint_with_yaml(content, &yaml);
    assert!(
        report.warnings.iter().all(|w| w.rule_name == rule),
        "unexpected rules in {:?}",
        report.warnings
    );
    report.warnings
}

pub fn lines(warnings: &[LintWarning]) -> Vec<usize> {
    warnings.iter().filter_map(|w| w.line).collect()
}
