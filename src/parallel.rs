/// Rule-level parallel execution.
///
/// Every enabled rule reads the same immutable [`LintContext`] and its own [`RuleConfig`],
/// so rules run independently on the rayon pool (or one after another without the
/// `parallel` feature). A rule that panics or returns an error is isolated: it yields a
/// single internal-failure warning and the other rules are unaffected.
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::RuleConfig;
use crate::lint_context::LintContext;
use crate::rule::{LintWarning, Rule};

/// What happened to one rule during a run
#[derive(Debug, Clone, PartialEq)]
pub enum RuleOutcome {
    Completed(Vec<LintWarning>),
    /// The rule failed; carries the synthetic internal-failure warning
    Failed(LintWarning),
    /// The deadline passed before the rule started
    Skipped,
}

/// A rule scheduled for one run, with its resolved config
pub struct RuleJob<'a> {
    pub rule: &'a dyn Rule,
    pub config: &'a RuleConfig,
}

/// Run every job, preserving job order in the output
pub fn evaluate_rules(
    ctx: &LintContext,
    jobs: &[RuleJob<'_>],
    deadline: Option<Instant>,
) -> Vec<(&'static str, RuleOutcome)> {
    #[cfg(feature = "parallel")]
    let iter = jobs.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = jobs.iter();

    iter.map(|job| (job.rule.name(), run_rule(ctx, job, deadline)))
        .collect()
}

fn run_rule(ctx: &LintContext, job: &RuleJob<'_>, deadline: Option<Instant>) -> RuleOutcome {
    let name = job.rule.name();
    if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
        log::warn!("Deadline passed before {name} started; skipping");
        return RuleOutcome::Skipped;
    }
    if job.rule.should_skip(ctx) {
        log::debug!("{name} has nothing to check");
        return RuleOutcome::Completed(Vec::new());
    }

    let start = Instant::now();
    let result = catch_unwind(AssertUnwindSafe(|| job.rule.check(ctx, job.config)));
    log::debug!("{name} took {:?}", start.elapsed());

    match result {
        Ok(Ok(warnings)) => RuleOutcome::Completed(warnings),
        Ok(Err(err)) => {
            log::warn!("{name} failed: {err}");
            RuleOutcome::Failed(LintWarning::internal_failure(name, &err.to_string()))
        }
        Err(payload) => {
            let detail = panic_message(payload.as_ref());
            log::warn!("{name} panicked: {detail}");
            RuleOutcome::Failed(LintWarning::internal_failure(name, &detail))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic".to_string()
    }
}
