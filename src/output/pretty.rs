//! Human-readable colored text formatter.
//!
//! Produces a terminal-friendly report with ANSI color codes: issues grouped
//! by field with severity tags, then a one-line PASS/FAIL summary.

use crate::issue::{Field, Severity, ValidationReport};
use colored::Colorize;

/// Render order for issue groups. Matches the rule-table order so the
/// pretty output reads top-to-bottom like the rule set.
const FIELD_ORDER: &[Field] = &[
    Field::Frontmatter,
    Field::Name,
    Field::Description,
    Field::Body,
    Field::Path,
];

/// Formats a [`ValidationReport`] as human-readable, ANSI-colored text.
///
/// Sections rendered (in order):
/// 1. **Header** — document source and timestamp.
/// 2. **Issues** — grouped by field, each with severity, rule id, message,
///    and remediation hint.
/// 3. **Summary** — PASS/FAIL plus error/warning counts.
pub fn format(report: &ValidationReport) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "\n{}\n",
        format!("  Skill Check: {}  ", report.source)
            .bold()
            .on_blue()
            .white()
    ));
    out.push_str(&format!("  Validated: {}\n\n", report.validated_at));

    if !report.issues.is_empty() {
        out.push_str(&format!("{}\n", "Issues".bold().underline()));
        for field in FIELD_ORDER {
            // Group without sorting: within a field, detection order is kept.
            let mut group = report.issues.iter().filter(|i| i.field == *field).peekable();
            if group.peek().is_none() {
                continue;
            }

            out.push_str(&format!("  {}\n", field.to_string().bold()));
            for issue in group {
                let severity_str = match issue.severity {
                    Severity::Error => "ERROR".red().bold().to_string(),
                    Severity::Warning => " WARN".yellow().bold().to_string(),
                };
                out.push_str(&format!(
                    "    [{severity_str}] {rule:<15} {message}\n",
                    rule = issue.rule.to_string().dimmed(),
                    message = issue.message,
                ));
                if let Some(ref fix) = issue.remediation {
                    out.push_str(&format!("            {}\n", fix.dimmed()));
                }
            }
        }
        out.push('\n');
    }

    // Summary
    let status_str = if report.passed {
        "PASS".green().bold().to_string()
    } else {
        "FAIL".red().bold().to_string()
    };
    let (errors, warnings) = report.count_by_severity();
    out.push_str(&format!(
        "Result: {status_str}  |  {errors} errors, {warnings} warnings\n"
    ));

    out
}
