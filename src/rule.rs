//! This module defines the Rule trait and related types for implementing linting rules in mdcheck.
//! A rule is a self-contained checker: it declares its identifier, alias and option schema,
//! and evaluates a tokenized document against its resolved configuration.

use serde::Serialize;
use thiserror::Error;

use crate::config::RuleConfig;
use crate::lint_context::LintContext;
use crate::rule_config_serde::OptionSchema;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LintError {
    #[error("Invalid configuration for {rule}: {message}")]
    InvalidConfig { rule: &'static str, message: String },
    #[error("Internal rule failure in {rule}: {message}")]
    Internal { rule: &'static str, message: String },
}

pub type LintResult = Result<Vec<LintWarning>, LintError>;

/// A single violation reported by a rule.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct LintWarning {
    pub rule_name: &'static str,
    /// 1-based line number, `None` for document-level reports such as internal rule failures
    pub line: Option<usize>,
    /// 1-based column of the offending span
    pub column: Option<usize>,
    pub severity: Severity,
    pub message: String,
    /// Suggested replacement for the offending line or prefix
    pub fix_hint: Option<String>,
}

impl LintWarning {
    /// Create a violation anchored at a line and column.
    pub fn at(rule_name: &'static str, line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            rule_name,
            line: Some(line),
            column: Some(column),
            severity: Severity::Error,
            message: message.into(),
            fix_hint: None,
        }
    }

    pub fn with_fix_hint(mut self, hint: impl Into<String>) -> Self {
        self.fix_hint = Some(hint.into());
        self
    }

    /// The synthetic report emitted when a rule fails instead of producing violations.
    pub fn internal_failure(rule_name: &'static str, detail: &str) -> Self {
        Self {
            rule_name,
            line: None,
            column: None,
            severity: Severity::Error,
            message: format!("internal rule failure: {detail}"),
            fix_hint: None,
        }
    }
}

/// Every violation is an error; there are no severity levels.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
        }
    }
}

/// Type of rule, used for listing and grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RuleCategory {
    Heading,
    List,
    Whitespace,
    Other,
}

pub trait Rule: Send + Sync {
    /// Rule identifier, e.g. `MD013`
    fn name(&self) -> &'static str;
    /// markdownlint alias, e.g. `line-length`
    fn alias(&self) -> &'static str;
    fn description(&self) -> &'static str;

    /// Evaluate the rule. Only called when the rule is enabled; `config` has already
    /// been validated against [`Rule::option_schema`].
    fn check(&self, ctx: &LintContext, config: &RuleConfig) -> LintResult;

    /// Named options with their kinds and defaults.
    fn option_schema(&self) -> OptionSchema;

    /// Validate a merged option map, returning a description of the first problem.
    fn validate_options(&self, options: &serde_json::Map<String, serde_json::Value>) -> Result<(), String>;

    /// Built-in enabled state and default options
    fn default_config(&self) -> RuleConfig {
        RuleConfig {
            enabled: self.default_enabled(),
            options: self.option_schema().defaults(),
        }
    }

    /// Built-in enabled state, overridden by a top-level `default` in user config
    fn default_enabled(&self) -> bool {
        true
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Other
    }

    /// Check if this rule should quickly skip processing based on content
    fn should_skip(&self, _ctx: &LintContext) -> bool {
        false
    }
}
