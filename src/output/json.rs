//! JSON output formatter.
//!
//! Produces a pretty-printed JSON document containing the source identifier,
//! a severity summary, and every issue found.

use crate::issue::{ValidationIssue, ValidationReport};

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    source: &'a str,
    validated_at: &'a str,
    passed: bool,
    summary: Summary,
    issues: &'a [ValidationIssue],
}

#[derive(serde::Serialize)]
struct Summary {
    errors: usize,
    warnings: usize,
}

/// Formats a [`ValidationReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &ValidationReport) -> String {
    let (errors, warnings) = report.count_by_severity();
    let output = JsonOutput {
        source: &report.source,
        validated_at: &report.validated_at,
        passed: report.passed,
        summary: Summary { errors, warnings },
        issues: &report.issues,
    };

    serde_json::to_string_pretty(&output).expect("JSON serialization failed")
}
