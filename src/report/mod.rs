//! Run report formatters.
//!
//! This module provides formatters for printing a [`RunReport`] in
//! different formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::runner::RunReport;
use std::io::Write;

/// Output format for run reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting run reports.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &RunReport, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
