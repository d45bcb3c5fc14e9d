/// Rule MD013: Line length
///
/// Length is counted in characters, not bytes, without the line terminator.
use crate::config::RuleConfig;
use crate::lint_context::{LineInfo, LintContext};
use crate::rule::{LintResult, LintWarning, Rule, RuleCategory};
use crate::rule_config_serde::{OptionSchema, RuleOptions, load_rule_config, parse_options};

mod md013_config;
pub use md013_config::MD013Config;

#[derive(Debug, Clone, Copy, Default)]
pub struct MD013LineLength;

impl MD013LineLength {
    fn is_skipped(line: &LineInfo, config: &MD013Config) -> bool {
        (!config.code_blocks && line.in_code_block)
            || (!config.headings && (line.heading.is_some() || line.is_setext_underline))
    }
}

impl Rule for MD013LineLength {
    fn name(&self) -> &'static str {
        MD013Config::RULE_NAME
    }

    fn alias(&self) -> &'static str {
        "line-length"
    }

    fn description(&self) -> &'static str {
        "Line length"
    }

    fn check(&self, ctx: &LintContext, config: &RuleConfig) -> LintResult {
        let config: MD013Config = load_rule_config(config)?;
        let limit = config.line_length.get();
        let mut warnings = Vec::new();

        for (line, text) in ctx.lines_with_text() {
            // Byte length bounds character count from above
            if text.len() <= limit {
                continue;
            }
            let length = text.chars().count();
            if length <= limit || Self::is_skipped(line, &config) {
                continue;
            }
            warnings.push(LintWarning::at(
                self.name(),
                line.line_num,
                limit + 1,
                format!("Line length {length} exceeds {limit} characters"),
            ));
        }

        Ok(warnings)
    }

    fn option_schema(&self) -> OptionSchema {
        OptionSchema::of::<MD013Config>()
    }

    fn validate_options(&self, options: &serde_json::Map<String, serde_json::Value>) -> Result<(), String> {
        parse_options::<MD013Config>(options).map(|_| ())
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Whitespace
    }

    fn should_skip(&self, ctx: &LintContext) -> bool {
        ctx.is_empty()
    }
}
