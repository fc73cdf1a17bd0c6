//! Sequential evaluation of check definitions.
//!
//! The [`CheckRunner`] builds each definition through a
//! [`CheckerRegistry`], evaluates it, and records one [`CheckOutcome`]
//! per definition. A failing or broken check never stops the remaining
//! ones unless fail-fast is requested.

pub mod outcome;

pub use outcome::{CheckOutcome, CheckStatus, RunReport};

use std::time::Instant;

use crate::checks::CheckerRegistry;
use crate::config::CheckDefinition;

/// Options for a run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Stop after the first check that does not pass.
    pub fail_fast: bool,
}

/// Evaluates check definitions one after another.
pub struct CheckRunner<'a> {
    registry: &'a CheckerRegistry,
    options: RunOptions,
}

impl<'a> CheckRunner<'a> {
    /// Create a runner over `registry`.
    pub fn new(registry: &'a CheckerRegistry, options: RunOptions) -> Self {
        Self { registry, options }
    }

    /// Evaluate all definitions in order.
    pub fn run(&self, definitions: &[CheckDefinition]) -> RunReport {
        let mut report = RunReport::default();

        for (index, definition) in definitions.iter().enumerate() {
            let outcome = self.evaluate(definition);
            let stop = self.options.fail_fast && outcome.status != CheckStatus::Passed;
            report.outcomes.push(outcome);
            if stop {
                report.skipped = definitions.len() - index - 1;
                tracing::debug!("Fail-fast: skipping {} remaining checks", report.skipped);
                break;
            }
        }

        report
    }

    /// Build and evaluate a single definition.
    pub fn evaluate(&self, definition: &CheckDefinition) -> CheckOutcome {
        let started = Instant::now();
        let mut outcome = CheckOutcome {
            label: definition.label().to_string(),
            check_type: definition.check_type.clone(),
            description: None,
            status: CheckStatus::Passed,
            message: None,
            duration: Default::default(),
        };

        match self.registry.build(definition) {
            Err(e) => {
                tracing::debug!("Check '{}' could not be built: {}", outcome.label, e);
                outcome.status = CheckStatus::Errored;
                outcome.message = Some(e.to_string());
            }
            Ok(checker) => {
                outcome.description = Some(checker.describe());
                if let Err(e) = checker.check() {
                    outcome.status = if e.is_assertion_failure() {
                        CheckStatus::Failed
                    } else {
                        CheckStatus::Errored
                    };
                    outcome.message = Some(e.to_string());
                }
            }
        }

        outcome.duration = started.elapsed();
        tracing::debug!(
            "Check '{}' finished: {} in {:?}",
            outcome.label,
            outcome.status,
            outcome.duration
        );
        outcome
    }
}
