//! JSON output formatter.
//!
//! Formats run reports as machine-readable JSON for tooling integration.

use super::ReportFormatter;
use crate::runner::{CheckStatus, RunReport};
use serde::Serialize;
use std::io::Write;

/// Formats run reports as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    checks: Vec<JsonCheck<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonCheck<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    check_type: &'a str,
    status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    duration_ms: u64,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    passed: usize,
    failed: usize,
    errored: usize,
    skipped: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &RunReport, writer: &mut W) -> std::io::Result<()> {
        let checks = report
            .outcomes
            .iter()
            .map(|o| JsonCheck {
                name: &o.label,
                check_type: &o.check_type,
                status: o.status,
                description: o.description.as_deref(),
                message: o.message.as_deref(),
                duration_ms: o.duration.as_millis() as u64,
            })
            .collect();

        let output = JsonOutput {
            checks,
            summary: JsonSummary {
                total: report.outcomes.len() + report.skipped,
                passed: report.passed(),
                failed: report.failed(),
                errored: report.errored(),
                skipped: report.skipped,
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}
