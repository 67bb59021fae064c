//! Validation facade.
//!
//! [`validate`] is the single entry point composing the frontmatter parser,
//! rule engine, and body analyzer into one [`ValidationReport`]. It is a
//! pure function over the document text: all I/O (reading the file,
//! printing the report) belongs to the caller, which keeps the pipeline
//! testable without a filesystem.

use crate::config::Config;
use crate::document::{ParseError, SkillDocument};
use crate::issue::{Field, Rule, Severity, ValidationIssue, ValidationReport};
use crate::rules;

/// Validates one skill document.
///
/// `source` identifies the document in the report (typically its path); it
/// is also what the `PATH_SEPARATOR` path rule inspects.
///
/// When the frontmatter cannot be parsed the report carries exactly one
/// error-severity issue tagged `field = frontmatter` and no rule evaluation
/// happens — rules cannot run on absent data.
///
/// Validating the same text twice yields identical issues: the rule table
/// is fixed and evaluated in order.
///
/// # Examples
///
/// ```rust
/// use skillcheck::{config::Config, validate::validate};
///
/// let report = validate("no frontmatter here", "doc.md", &Config::default());
/// assert!(!report.passed);
/// assert_eq!(report.issues.len(), 1);
/// ```
pub fn validate(text: &str, source: &str, config: &Config) -> ValidationReport {
    let strict = config.strict.enabled;

    let doc = match SkillDocument::parse(text) {
        Ok(doc) => doc,
        Err(e) => {
            let rule = match e {
                ParseError::MissingFrontmatter => Rule::MissingFrontmatter,
                ParseError::MalformedFrontmatter { .. } => Rule::MalformedFrontmatter,
            };
            let issue = ValidationIssue {
                field: Field::Frontmatter,
                rule,
                message: e.to_string(),
                severity: Severity::Error,
                remediation: Some(
                    "Begin the document with a '---'-delimited block of 'key: value' lines"
                        .to_string(),
                ),
            };
            return ValidationReport::from_issues(source, vec![issue], strict);
        }
    };

    let issues = rules::evaluate(&doc, Some(source), config);
    ValidationReport::from_issues(source, issues, strict)
}
