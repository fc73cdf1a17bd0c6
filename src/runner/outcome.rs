//! Per-check outcomes and the aggregated run report.

use serde::Serialize;
use std::time::Duration;

/// How a single check definition ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The host satisfies the assertion.
    Passed,
    /// The check ran and the assertion does not hold.
    Failed,
    /// The check could not be built or evaluated.
    Errored,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Passed => write!(f, "pass"),
            CheckStatus::Failed => write!(f, "fail"),
            CheckStatus::Errored => write!(f, "error"),
        }
    }
}

/// Result of one check definition.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Explicit name or check type.
    pub label: String,
    /// Check type from the definition.
    pub check_type: String,
    /// Checker description, when construction succeeded.
    pub description: Option<String>,
    pub status: CheckStatus,
    /// Failure or error message.
    pub message: Option<String>,
    pub duration: Duration,
}

/// Outcomes of a run, in definition order.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub outcomes: Vec<CheckOutcome>,
    /// Definitions not evaluated because of fail-fast.
    pub skipped: usize,
}

impl RunReport {
    fn count(&self, status: CheckStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    pub fn passed(&self) -> usize {
        self.count(CheckStatus::Passed)
    }

    pub fn failed(&self) -> usize {
        self.count(CheckStatus::Failed)
    }

    pub fn errored(&self) -> usize {
        self.count(CheckStatus::Errored)
    }

    /// Whether every evaluated check passed and none were skipped.
    pub fn is_success(&self) -> bool {
        self.skipped == 0 && self.outcomes.iter().all(|o| o.status == CheckStatus::Passed)
    }

    /// Process exit code: 0 all passed, 1 assertion failures, 2 errors.
    pub fn exit_code(&self) -> i32 {
        if self.errored() > 0 {
            2
        } else if self.failed() > 0 || self.skipped > 0 {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(status: CheckStatus) -> CheckOutcome {
        CheckOutcome {
            label: "x".to_string(),
            check_type: "file-exists".to_string(),
            description: None,
            status,
            message: None,
            duration: Duration::ZERO,
        }
    }

    #[test]
    fn empty_report_is_success() {
        let report = RunReport::default();
        assert!(report.is_success());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn failure_maps_to_exit_one() {
        let report = RunReport {
            outcomes: vec![outcome(CheckStatus::Passed), outcome(CheckStatus::Failed)],
            skipped: 0,
        };
        assert!(!report.is_success());
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn error_outranks_failure() {
        let report = RunReport {
            outcomes: vec![outcome(CheckStatus::Failed), outcome(CheckStatus::Errored)],
            skipped: 0,
        };
        assert_eq!(report.exit_code(), 2);
    }

    #[test]
    fn status_display() {
        assert_eq!(CheckStatus::Passed.to_string(), "pass");
        assert_eq!(CheckStatus::Failed.to_string(), "fail");
        assert_eq!(CheckStatus::Errored.to_string(), "error");
    }
}
