//! Human-readable output formatter.
//!
//! One line per check, followed by the failure message and a summary line.

use super::ReportFormatter;
use crate::runner::{CheckStatus, RunReport};
use console::Style;
use std::io::Write;

/// Formats run reports for terminal display.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn status_style(&self, status: CheckStatus) -> Style {
        if !self.use_color {
            return Style::new();
        }
        match status {
            CheckStatus::Passed => Style::new().green(),
            CheckStatus::Failed => Style::new().red().bold(),
            CheckStatus::Errored => Style::new().color256(208),
        }
    }

    fn status_tag(status: CheckStatus) -> &'static str {
        match status {
            CheckStatus::Passed => "PASS",
            CheckStatus::Failed => "FAIL",
            CheckStatus::Errored => "ERROR",
        }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &RunReport, writer: &mut W) -> std::io::Result<()> {
        for outcome in &report.outcomes {
            let tag = self
                .status_style(outcome.status)
                .force_styling(self.use_color)
                .apply_to(format!("{:<5}", Self::status_tag(outcome.status)));
            write!(writer, "{} {}", tag, outcome.label)?;
            if let Some(description) = &outcome.description {
                if description != &outcome.label {
                    write!(writer, " ({})", description)?;
                }
            }
            writeln!(writer)?;

            if let Some(message) = &outcome.message {
                writeln!(writer, "      {}", message)?;
            }
        }

        if !report.outcomes.is_empty() {
            writeln!(writer)?;
        }
        write!(
            writer,
            "{} passed, {} failed, {} errored",
            report.passed(),
            report.failed(),
            report.errored()
        )?;
        if report.skipped > 0 {
            write!(writer, ", {} skipped", report.skipped)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::CheckOutcome;
    use std::time::Duration;

    fn outcome(label: &str, status: CheckStatus, message: Option<&str>) -> CheckOutcome {
        CheckOutcome {
            label: label.to_string(),
            check_type: "file-exists".to_string(),
            description: Some(format!("file-exists /{}", label)),
            status,
            message: message.map(str::to_string),
            duration: Duration::ZERO,
        }
    }

    fn render(report: &RunReport) -> String {
        let mut output = Vec::new();
        HumanFormatter::new(false)
            .format(report, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn formats_pass_and_fail_lines() {
        let report = RunReport {
            outcomes: vec![
                outcome("hosts", CheckStatus::Passed, None),
                outcome("motd", CheckStatus::Failed, Some("/motd doesn't exist and should")),
            ],
            skipped: 0,
        };
        let output = render(&report);

        assert!(output.contains("PASS  hosts (file-exists /hosts)"));
        assert!(output.contains("FAIL  motd"));
        assert!(output.contains("      /motd doesn't exist and should"));
        assert!(output.contains("1 passed, 1 failed, 0 errored"));
    }

    #[test]
    fn formats_error_and_skipped() {
        let report = RunReport {
            outcomes: vec![outcome("bad", CheckStatus::Errored, Some("Unknown check type: x"))],
            skipped: 3,
        };
        let output = render(&report);

        assert!(output.contains("ERROR bad"));
        assert!(output.contains("0 passed, 0 failed, 1 errored, 3 skipped"));
    }

    #[test]
    fn no_color_output_has_no_escapes() {
        let report = RunReport {
            outcomes: vec![outcome("hosts", CheckStatus::Failed, None)],
            skipped: 0,
        };
        assert!(!render(&report).contains('\u{1b}'));
    }

    #[test]
    fn empty_report_prints_summary_only() {
        assert_eq!(
            render(&RunReport::default()),
            "0 passed, 0 failed, 0 errored\n"
        );
    }
}
