/// Rule MD024: Multiple headings with the same content
///
/// Heading text is compared trimmed and case-folded. The comparison scope is the whole
/// document by default, headings of the same level with `allow_different_nesting`, or
/// headings of the same level sharing a parent with `siblings_only`.
use std::collections::{HashMap, HashSet};

use crate::config::RuleConfig;
use crate::lint_context::LintContext;
use crate::rule::{LintResult, LintWarning, Rule, RuleCategory};
use crate::rule_config_serde::{OptionSchema, RuleOptions, load_rule_config, parse_options};

mod md024_config;
pub use md024_config::MD024Config;

/// The group a heading is compared within
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Scope {
    Document,
    Level(u8),
    /// Level plus the line of the nearest preceding heading of lower level
    Siblings(u8, Option<usize>),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MD024NoDuplicateHeading;

impl MD024NoDuplicateHeading {
    fn normalize(text: &str) -> String {
        text.trim().to_lowercase()
    }
}

impl Rule for MD024NoDuplicateHeading {
    fn name(&self) -> &'static str {
        MD024Config::RULE_NAME
    }

    fn alias(&self) -> &'static str {
        "no-duplicate-heading"
    }

    fn description(&self) -> &'static str {
        "Multiple headings with the same content"
    }

    fn check(&self, ctx: &LintContext, config: &RuleConfig) -> LintResult {
        let config: MD024Config = load_rule_config(config)?;
        let mut warnings = Vec::new();
        let mut seen: HashMap<Scope, HashSet<String>> = HashMap::new();
        // (level, line) of open ancestors, shallowest first
        let mut ancestors: Vec<(u8, usize)> = Vec::new();

        for (line, heading) in ctx.headings() {
            while ancestors.last().is_some_and(|&(level, _)| level >= heading.level) {
                ancestors.pop();
            }
            let parent = ancestors.last().map(|&(_, parent_line)| parent_line);
            ancestors.push((heading.level, line.line_num));

            let text = Self::normalize(&heading.text);
            if text.is_empty() {
                continue;
            }

            let scope = if config.siblings_only {
                Scope::Siblings(heading.level, parent)
            } else if config.allow_different_nesting {
                Scope::Level(heading.level)
            } else {
                Scope::Document
            };

            if !seen.entry(scope).or_default().insert(text) {
                warnings.push(LintWarning::at(
                    self.name(),
                    line.line_num,
                    line.visual_indent + 1,
                    format!("Duplicate heading: '{}'.", heading.text),
                ));
            }
        }

        Ok(warnings)
    }

    fn option_schema(&self) -> OptionSchema {
        OptionSchema::of::<MD024Config>()
    }

    fn validate_options(&self, options: &serde_json::Map<String, serde_json::Value>) -> Result<(), String> {
        parse_options::<MD024Config>(options).map(|_| ())
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Heading
    }

    fn should_skip(&self, ctx: &LintContext) -> bool {
        ctx.headings().next().is_none()
    }
}
