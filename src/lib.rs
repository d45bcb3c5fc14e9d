//! mdcheck: a rule-based Markdown linting engine.
//!
//! A run tokenizes the document once into a [`LintContext`], evaluates every enabled rule
//! of a [`RuleRegistry`] against it with the options from a [`ResolvedConfig`], and
//! aggregates the violations into a [`LintReport`] sorted by line and rule id.

pub mod config;
pub mod exit_codes;
pub mod lint_context;
pub mod output;
pub mod parallel;
pub mod report;
pub mod rule;
pub mod rule_config_serde;
pub mod rules;
pub mod types;

pub use crate::config::{ConfigError, ResolvedConfig, RuleConfig, RuleSetting, UserConfig, resolve, resolve_tolerant};
pub use crate::lint_context::{LintContext, tokenize};
pub use crate::report::{LintReport, LintSummary, aggregate};
pub use crate::rule::{LintError, LintResult, LintWarning, Rule, Severity};
pub use crate::rules::{RuleRegistry, all_rules};

use crate::parallel::{RuleJob, RuleOutcome, evaluate_rules};
use std::time::{Duration, Instant};

/// Per-run engine options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LintOptions {
    /// Rules not yet started when this much time has passed are skipped
    pub deadline: Option<Duration>,
}

/// Lint a document against every rule of `registry` that `resolved` enables.
///
/// Never fails: malformed Markdown degrades to plain text, and a rule that fails is
/// reported as a line-less internal failure of that rule.
pub fn lint(content: &str, registry: &RuleRegistry, resolved: &ResolvedConfig, options: &LintOptions) -> LintReport {
    let start = Instant::now();
    let deadline = options.deadline.map(|limit| start + limit);
    let ctx = LintContext::new(content);

    let jobs: Vec<RuleJob<'_>> = registry
        .iter()
        .filter_map(|rule| {
            resolved
                .get(rule.name())
                .filter(|config| config.enabled)
                .map(|config| RuleJob { rule, config })
        })
        .collect();

    let mut per_rule = Vec::with_capacity(jobs.len());
    let mut skipped_rules = Vec::new();
    for (name, outcome) in evaluate_rules(&ctx, &jobs, deadline) {
        match outcome {
            RuleOutcome::Completed(warnings) => per_rule.push(warnings),
            RuleOutcome::Failed(failure) => per_rule.push(vec![failure]),
            RuleOutcome::Skipped => skipped_rules.push(name),
        }
    }

    let truncated = !skipped_rules.is_empty();
    if truncated {
        log::warn!("Deadline reached; skipped {}", skipped_rules.join(", "));
    }
    log::debug!("Linted {} lines with {} rules in {:?}", ctx.lines.len(), jobs.len(), start.elapsed());

    LintReport {
        warnings: aggregate(per_rule),
        truncated,
        skipped_rules,
    }
}
