//! Aggregation of per-rule violations into one ordered report.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::rule::LintWarning;

/// The terminal result of linting one document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LintReport {
    /// Violations sorted by (line, rule id); line-less reports come last
    pub warnings: Vec<LintWarning>,
    /// Set when a deadline stopped some rules from running
    pub truncated: bool,
    /// Rules that never started because of the deadline, in registry order
    pub skipped_rules: Vec<&'static str>,
}

/// Violation counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LintSummary {
    pub total: usize,
    /// Counts keyed by rule id, in id order
    pub by_rule: BTreeMap<&'static str, usize>,
}

impl LintReport {
    pub fn summary(&self) -> LintSummary {
        let mut by_rule = BTreeMap::new();
        for warning in &self.warnings {
            *by_rule.entry(warning.rule_name).or_insert(0) += 1;
        }
        LintSummary {
            total: self.warnings.len(),
            by_rule,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Concatenate per-rule outputs and stable-sort them by (line, rule id).
///
/// A warning without a line sorts after every positioned warning. Warnings of one rule
/// on one line keep the order the rule emitted them in.
pub fn aggregate<I>(per_rule: I) -> Vec<LintWarning>
where
    I: IntoIterator<Item = Vec<LintWarning>>,
{
    let mut warnings: Vec<LintWarning> = per_rule.into_iter().flatten().collect();
    warnings.sort_by(|a, b| {
        let a_key = (a.line.unwrap_or(usize::MAX), a.rule_name);
        let b_key = (b.line.unwrap_or(usize::MAX), b.rule_name);
        a_key.cmp(&b_key)
    });
    warnings
}
