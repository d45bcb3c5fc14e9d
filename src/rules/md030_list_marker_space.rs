/// Rule MD030: Spaces after list markers
///
/// An item is "multi" when its body, nested items included, covers two or more non-blank
/// lines before its next sibling or the end of the list.
use crate::config::RuleConfig;
use crate::lint_context::{LineInfo, LintContext, ListItemInfo};
use crate::rule::{LintResult, LintWarning, Rule, RuleCategory};
use crate::rule_config_serde::{OptionSchema, RuleOptions, load_rule_config, parse_options};

mod md030_config;
pub use md030_config::MD030Config;

#[derive(Debug, Clone, Copy, Default)]
pub struct MD030ListMarkerSpace;

impl MD030ListMarkerSpace {
    /// The line with its marker spacing replaced by `expected` spaces
    fn fix_line(text: &str, line: &LineInfo, item: &ListItemInfo, expected: usize) -> String {
        let marker_end = line.indent + item.marker.len();
        let content_start = marker_end + item.spaces_after_marker;
        format!(
            "{}{}{}",
            &text[..marker_end],
            " ".repeat(expected),
            &text[content_start..]
        )
    }
}

impl Rule for MD030ListMarkerSpace {
    fn name(&self) -> &'static str {
        MD030Config::RULE_NAME
    }

    fn alias(&self) -> &'static str {
        "list-marker-space"
    }

    fn description(&self) -> &'static str {
        "Spaces after list markers"
    }

    fn check(&self, ctx: &LintContext, config: &RuleConfig) -> LintResult {
        let config: MD030Config = load_rule_config(config)?;
        let mut warnings = Vec::new();

        for (line, item) in ctx.list_items() {
            let expected = config.expected_spaces(item.is_ordered, item.is_multi_line);
            let actual = item.spaces_after_marker;
            if actual == expected {
                continue;
            }

            let text = ctx.line_text(line);
            let column = text[..line.indent].chars().count() + item.marker.chars().count() + 1;
            warnings.push(
                LintWarning::at(
                    self.name(),
                    line.line_num,
                    column,
                    format!(
                        "Expected {expected} space{} after list marker, found {actual}",
                        if expected == 1 { "" } else { "s" }
                    ),
                )
                .with_fix_hint(Self::fix_line(text, line, item, expected)),
            );
        }

        Ok(warnings)
    }

    fn option_schema(&self) -> OptionSchema {
        OptionSchema::of::<MD030Config>()
    }

    fn validate_options(&self, options: &serde_json::Map<String, serde_json::Value>) -> Result<(), String> {
        parse_options::<MD030Config>(options).map(|_| ())
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::List
    }

    fn should_skip(&self, ctx: &LintContext) -> bool {
        !ctx.has_list_items()
    }
}
