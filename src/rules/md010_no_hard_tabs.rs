/// Rule MD010: No hard tabs
///
/// Reports every line containing a tab character, once per line. Detection never depends
/// on `spaces_per_tab`; it only shapes the suggested replacement.
use crate::config::RuleConfig;
use crate::lint_context::{LineInfo, LintContext};
use crate::rule::{LintResult, LintWarning, Rule, RuleCategory};
use crate::rule_config_serde::{OptionSchema, RuleOptions, load_rule_config, parse_options};

mod md010_config;
pub use md010_config::MD010Config;

#[derive(Debug, Clone, Copy, Default)]
pub struct MD010NoHardTabs;

impl MD010NoHardTabs {
    fn is_excluded(ctx: &LintContext, line: &LineInfo, config: &MD010Config) -> bool {
        if !line.in_code_block {
            return false;
        }
        if !config.code_blocks {
            return true;
        }
        ctx.code_block_for(line)
            .and_then(|block| block.language.as_deref())
            .is_some_and(|language| {
                config
                    .ignore_code_languages
                    .iter()
                    .any(|ignored| ignored.eq_ignore_ascii_case(language))
            })
    }
}

impl Rule for MD010NoHardTabs {
    fn name(&self) -> &'static str {
        MD010Config::RULE_NAME
    }

    fn alias(&self) -> &'static str {
        "no-hard-tabs"
    }

    fn description(&self) -> &'static str {
        "Hard tabs"
    }

    fn check(&self, ctx: &LintContext, config: &RuleConfig) -> LintResult {
        let config: MD010Config = load_rule_config(config)?;
        let expansion = " ".repeat(config.spaces_per_tab.get());
        let mut warnings = Vec::new();

        for (line, text) in ctx.lines_with_text() {
            let Some(first_tab) = text.chars().position(|c| c == '\t') else {
                continue;
            };
            if Self::is_excluded(ctx, line, &config) {
                continue;
            }
            warnings.push(
                LintWarning::at(self.name(), line.line_num, first_tab + 1, "hard tab found")
                    .with_fix_hint(text.replace('\t', &expansion)),
            );
        }

        Ok(warnings)
    }

    fn option_schema(&self) -> OptionSchema {
        OptionSchema::of::<MD010Config>()
    }

    fn validate_options(&self, options: &serde_json::Map<String, serde_json::Value>) -> Result<(), String> {
        parse_options::<MD010Config>(options).map(|_| ())
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Whitespace
    }

    fn should_skip(&self, ctx: &LintContext) -> bool {
        !ctx.content.contains('\t')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule_config_serde::to_rule_config;
    use crate::types::SpaceCount;

    fn check(content: &str, config: &MD010Config) -> Vec<LintWarning> {
        let ctx = LintContext::new(content);
        MD010NoHardTabs.check(&ctx, &to_rule_config(config)).unwrap()
    }

    #[test]
    fn test_one_violation_per_line() {
        let result = check("no tabs\n\tone\ta\tb\n", &MD010Config::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].line, Some(2));
        assert_eq!(result[0].column, Some(1));
        assert_eq!(result[0].message, "hard tab found");
    }

    #[test]
    fn test_column_of_first_tab() {
        let result = check("text\there", &MD010Config::default());
        assert_eq!(result[0].column, Some(5));
    }

    #[test]
    fn test_fix_hint_expands_tabs() {
        let config = MD010Config {
            spaces_per_tab: SpaceCount::from_const(2),
            ..Default::default()
        };
        let result = check("\tx\ty", &config);
        assert_eq!(result[0].fix_hint.as_deref(), Some("  x  y"));
    }

    #[test]
    fn test_code_blocks_checked_by_default() {
        let content = "```\n\tcode\n```";
        assert_eq!(check(content, &MD010Config::default()).len(), 1);
    }

    #[test]
    fn test_code_blocks_false_skips_fenced_lines() {
        let config = MD010Config {
            code_blocks: false,
            ..Default::default()
        };
        let content = "```\n\tcode\n```\n\toutside";
        let result = check(content, &config);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].line, Some(4));
    }

    #[test]
    fn test_ignore_code_languages() {
        let config = MD010Config {
            ignore_code_languages: vec!["makefile".to_string()],
            ..Default::default()
        };
        let content = "```Makefile\nall:\n\tcc main.c\n```\n\n```sh\n\techo hi\n```";
        let result = check(content, &config);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].line, Some(7));
    }

    #[test]
    fn test_unterminated_fence_counts_as_code() {
        let config = MD010Config {
            code_blocks: false,
            ..Default::default()
        };
        assert!(check("```\n\tstill code", &config).is_empty());
    }
}
