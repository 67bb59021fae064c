//! Output formatting for validation reports.
//!
//! Two formats are supported:
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | [`Pretty`](OutputFormat::Pretty) | [`pretty`] | Terminal / human review |
//! | [`Json`](OutputFormat::Json)     | [`json`]   | Automation / scripting  |
//!
//! Use [`format_report`] to render a [`ValidationReport`] in either format.

pub mod json;
pub mod pretty;

use crate::issue::ValidationReport;

/// Supported output formats for validation reports.
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text grouped by field.
    Pretty,
    /// Machine-readable JSON.
    Json,
}

/// Formats a [`ValidationReport`] in the requested [`OutputFormat`].
pub fn format_report(report: &ValidationReport, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => pretty::format(report),
        OutputFormat::Json => json::format(report),
    }
}
