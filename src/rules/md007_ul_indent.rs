/// Rule MD007: Unordered list indentation
///
/// Nesting is measured in steps of `indent` columns from the parent item's marker: a
/// nested unordered item at `depth` steps below its parent must sit exactly
/// `indent × depth` columns to the right of that marker, so any indentation that is not a
/// whole number of steps is reported. Items nested anywhere under an ordered item are not
/// checked, since their position follows the ordered marker's width rather than a fixed step.
use crate::config::RuleConfig;
use crate::lint_context::{LintContext, ListItemInfo};
use crate::rule::{LintResult, LintWarning, Rule, RuleCategory};
use crate::rule_config_serde::{OptionSchema, RuleOptions, load_rule_config, parse_options};

mod md007_config;
pub use md007_config::MD007Config;

#[derive(Debug, Clone, Copy, Default)]
pub struct MD007ULIndent;

impl MD007ULIndent {
    /// The marker column an item should have, or `None` when it is not checked.
    ///
    /// `steps` is how many indent levels the item sits below its parent.
    fn expected_column(item: &ListItemInfo, steps: usize, config: &MD007Config) -> Option<usize> {
        if item.is_ordered || item.has_ordered_ancestor {
            return None;
        }
        match item.parent_marker_column {
            Some(parent_column) => Some(parent_column + config.indent.get() * steps),
            None if config.start_indented => Some(config.start_indent.get()),
            None => None,
        }
    }
}

impl Rule for MD007ULIndent {
    fn name(&self) -> &'static str {
        MD007Config::RULE_NAME
    }

    fn alias(&self) -> &'static str {
        "ul-indent"
    }

    fn description(&self) -> &'static str {
        "Unordered list indentation"
    }

    fn check(&self, ctx: &LintContext, config: &RuleConfig) -> LintResult {
        let config: MD007Config = load_rule_config(config)?;
        let levels = ctx.list_indent_levels(config.indent.get());
        let mut warnings = Vec::new();

        for (idx, line) in ctx.lines.iter().enumerate() {
            let Some(item) = line.list_item.as_deref() else {
                continue;
            };
            let level = levels[idx].unwrap_or(0);
            let parent_level = item
                .parent_line
                .and_then(|parent| levels.get(parent - 1).copied().flatten())
                .unwrap_or(0);
            let Some(expected) = Self::expected_column(item, level.saturating_sub(parent_level), &config) else {
                continue;
            };
            let actual = item.marker_column;
            if actual == expected {
                continue;
            }

            let text = ctx.line_text(line);
            let replacement = format!("{}{}", " ".repeat(expected), text.trim_start());
            warnings.push(
                LintWarning::at(
                    self.name(),
                    line.line_num,
                    actual + 1,
                    format!("Unordered list indentation should be {expected} spaces (depth {level}), found {actual}"),
                )
                .with_fix_hint(replacement),
            );
        }

        Ok(warnings)
    }

    fn option_schema(&self) -> OptionSchema {
        OptionSchema::of::<MD007Config>()
    }

    fn validate_options(&self, options: &serde_json::Map<String, serde_json::Value>) -> Result<(), String> {
        parse_options::<MD007Config>(options).map(|_| ())
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::List
    }

    fn should_skip(&self, ctx: &LintContext) -> bool {
        !ctx.has_list_items()
    }
}
