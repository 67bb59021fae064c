use std::fmt;

/// Severity of a [`ValidationIssue`].
///
/// Only [`Severity::Error`] fails a report; warnings are advisory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// The document attribute a rule evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Description,
    Body,
    Path,
    Frontmatter,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Description => write!(f, "description"),
            Field::Body => write!(f, "body"),
            Field::Path => write!(f, "path"),
            Field::Frontmatter => write!(f, "frontmatter"),
        }
    }
}

/// Symbolic identifier of a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rule {
    Presence,
    MaxLength,
    Charset,
    ReservedWord,
    Markup,
    WhatWhen,
    LineLimit,
    PathSeparator,
    MissingFrontmatter,
    MalformedFrontmatter,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Presence => write!(f, "PRESENCE"),
            Rule::MaxLength => write!(f, "MAX_LENGTH"),
            Rule::Charset => write!(f, "CHARSET"),
            Rule::ReservedWord => write!(f, "RESERVED_WORD"),
            Rule::Markup => write!(f, "MARKUP"),
            Rule::WhatWhen => write!(f, "WHAT_WHEN"),
            Rule::LineLimit => write!(f, "LINE_LIMIT"),
            Rule::PathSeparator => write!(f, "PATH_SEPARATOR"),
            Rule::MissingFrontmatter => write!(f, "MISSING_FRONTMATTER"),
            Rule::MalformedFrontmatter => write!(f, "MALFORMED_FRONTMATTER"),
        }
    }
}

/// A single rule violation detected during validation.
///
/// Issues are data, not errors: failing a rule is an expected outcome of
/// validating a document, so the rule engine collects issues instead of
/// returning early.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationIssue {
    pub field: Field,
    pub rule: Rule,
    pub message: String,
    pub severity: Severity,
    pub remediation: Option<String>,
}

/// The outcome of validating one document.
///
/// `issues` preserves detection order; `passed` is `true` iff no issue has
/// [`Severity::Error`]. Warnings never fail a report unless strict mode
/// promoted them at construction time.
#[derive(Debug, serde::Serialize)]
pub struct ValidationReport {
    /// Source identifier of the validated document (a path, usually).
    pub source: String,
    pub validated_at: String,
    pub issues: Vec<ValidationIssue>,
    pub passed: bool,
}

impl ValidationReport {
    /// Assembles a report from collected issues.
    ///
    /// With `strict` set, warnings count against `passed` as well.
    pub fn from_issues(source: &str, issues: Vec<ValidationIssue>, strict: bool) -> Self {
        let passed = if strict {
            issues.is_empty()
        } else {
            !issues.iter().any(|i| i.severity == Severity::Error)
        };

        ValidationReport {
            source: source.to_string(),
            validated_at: chrono::Utc::now().to_rfc3339(),
            issues,
            passed,
        }
    }

    /// Count errors and warnings in a single pass.
    ///
    /// Returns `(errors, warnings)`.
    pub fn count_by_severity(&self) -> (usize, usize) {
        self.issues
            .iter()
            .fold((0, 0), |(e, w), i| match i.severity {
                Severity::Error => (e + 1, w),
                Severity::Warning => (e, w + 1),
            })
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }
}
