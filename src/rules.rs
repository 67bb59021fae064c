//! The validation rule engine.
//!
//! Applies a fixed, ordered rule set to a parsed [`SkillDocument`]. Every
//! rule is evaluated — there is no short-circuiting — so a single pass
//! produces an exhaustive report. A field that violates two rules reports
//! two separate issues.
//!
//! # Rules
//!
//! | ID | Field | Sev | What it checks |
//! |----|-------|-----|----------------|
//! | `PRESENCE` | name | Error | `name` must exist and be non-empty |
//! | `MAX_LENGTH` | name | Error | ≤ 64 characters |
//! | `CHARSET` | name | Error | only `[a-z0-9-]` |
//! | `RESERVED_WORD` | name | Error | no "anthropic"/"claude" substring |
//! | `PRESENCE` | description | Error | `description` must exist and be non-empty |
//! | `MAX_LENGTH` | description | Error | ≤ 1024 characters |
//! | `MARKUP` | description | Error | no `<` followed by a letter |
//! | `WHAT_WHEN` | description | Warning | should say what *and* when |
//! | `LINE_LIMIT` | body | Warning | body ≤ 500 lines |
//! | `PATH_SEPARATOR` | body | Warning | no Windows-style backslash paths |
//! | `PATH_SEPARATOR` | path | Error | supplied path contains `\` |

use crate::body;
use crate::config::Config;
use crate::document::SkillDocument;
use crate::issue::{Field, Rule, Severity, ValidationIssue};
use regex::Regex;
use std::sync::LazyLock;

/// Opening angle bracket immediately followed by a letter — the heuristic
/// for an XML/HTML tag. A bare `<` (comparison, arrow art) does not match.
static RE_MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[A-Za-z]").unwrap());

/// Leading imperative verb forms that signal a description says *what* the
/// skill does. Drawn from how published skills actually open their
/// descriptions; this is a completeness heuristic, not a grammar check.
static RE_IMPERATIVE_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(creates?|extracts?|generates?|validates?|converts?|analyz(?:es?|e)|builds?|formats?|manages?|process(?:es)?|writes?|reviews?|runs?|parses?|scans?|checks?|produces?|summariz(?:es?|e)|translates?|transforms?)\b",
    )
    .unwrap()
});

/// Phrases that signal "when to use" context in a description.
/// Descriptions are how an agent selects the right skill from many, so
/// trigger context matters for discovery.
const TRIGGER_PHRASES: &[&str] = &[
    "use when",
    "when the user",
    "when working",
    "when creating",
    "when implementing",
    "when managing",
    "when analyzing",
];

fn emit(
    issues: &mut Vec<ValidationIssue>,
    field: Field,
    rule: Rule,
    severity: Severity,
    message: impl Into<String>,
    remediation: &str,
) {
    issues.push(ValidationIssue {
        field,
        rule,
        message: message.into(),
        severity,
        remediation: Some(remediation.to_string()),
    });
}

/// Rules 1–4 — validate the `name` field.
fn validate_name(issues: &mut Vec<ValidationIssue>, name: Option<&str>, config: &Config) {
    let name = name.unwrap_or("");

    if name.is_empty() {
        emit(
            issues,
            Field::Name,
            Rule::Presence,
            Severity::Error,
            "name field is required and cannot be empty",
            "Add a 'name: my-skill' line to the frontmatter",
        );
    }

    // The remaining name rules are vacuous for an empty string, so running
    // them unconditionally keeps the pass exhaustive without special cases.
    let max = config.limits.max_name_length;
    if name.chars().count() > max {
        emit(
            issues,
            Field::Name,
            Rule::MaxLength,
            Severity::Error,
            format!(
                "name is {} characters — maximum is {max}",
                name.chars().count()
            ),
            "Shorten the skill name",
        );
    }

    if name
        .chars()
        .any(|c| !c.is_ascii_lowercase() && !c.is_ascii_digit() && c != '-')
    {
        emit(
            issues,
            Field::Name,
            Rule::Charset,
            Severity::Error,
            "name must contain only lowercase letters, numbers, and hyphens",
            "Rename to lowercase-kebab-case (e.g. 'my-skill' not 'My_Skill')",
        );
    }

    let name_lower = name.to_lowercase();
    for word in &config.reserved_words {
        if name_lower.contains(word.as_str()) {
            emit(
                issues,
                Field::Name,
                Rule::ReservedWord,
                Severity::Error,
                format!("name cannot contain reserved word '{word}'"),
                "Choose a name that does not reference brand names",
            );
        }
    }
}

/// Rules 5–8 — validate the `description` field.
fn validate_description(issues: &mut Vec<ValidationIssue>, description: Option<&str>, config: &Config) {
    let desc = description.unwrap_or("");

    if desc.is_empty() {
        emit(
            issues,
            Field::Description,
            Rule::Presence,
            Severity::Error,
            "description field is required and cannot be empty",
            "Add a meaningful description field to the frontmatter",
        );
        // A missing description has nothing left to check; the what+when
        // warning would only add noise on top of the presence error.
        return;
    }

    let max = config.limits.max_description_length;
    if desc.chars().count() > max {
        emit(
            issues,
            Field::Description,
            Rule::MaxLength,
            Severity::Error,
            format!(
                "description is {} characters — maximum is {max}",
                desc.chars().count()
            ),
            "Shorten the description",
        );
    }

    if RE_MARKUP.is_match(desc) {
        emit(
            issues,
            Field::Description,
            Rule::Markup,
            Severity::Error,
            "description cannot contain XML/HTML tags",
            "Remove angle-bracket markup from the description",
        );
    }

    // Completeness heuristic: a good description says both what the skill
    // does (imperative verb phrase) and when to invoke it ("Use when ...").
    let desc_lower = desc.to_lowercase();
    let has_trigger = TRIGGER_PHRASES.iter().any(|p| desc_lower.contains(p));
    let has_imperative = RE_IMPERATIVE_OPEN.is_match(desc);
    if !has_trigger && !has_imperative {
        emit(
            issues,
            Field::Description,
            Rule::WhatWhen,
            Severity::Warning,
            "description should say what the skill does and when to use it (e.g. 'Use when...')",
            "Append 'Use when <specific trigger condition>.' to the description",
        );
    }
}

/// Rules 9–10 — validate the document body.
fn validate_body(issues: &mut Vec<ValidationIssue>, body_text: &str, config: &Config) {
    let lines = body::count_lines(body_text);
    let max = config.limits.max_body_lines;
    if lines > max {
        emit(
            issues,
            Field::Body,
            Rule::LineLimit,
            Severity::Warning,
            format!("body has {lines} lines — recommended maximum is {max}"),
            "Split the body into separate reference files (progressive disclosure)",
        );
    }

    if body::contains_backslash_path(body_text) {
        emit(
            issues,
            Field::Body,
            Rule::PathSeparator,
            Severity::Warning,
            "body contains a Windows-style backslash path — use forward slashes",
            "Replace backslash paths with forward slashes (e.g. path/to/file)",
        );
    }
}

/// Rule 11 — validate a supplied source path.
fn validate_path(issues: &mut Vec<ValidationIssue>, path: &str) {
    if path.contains('\\') {
        emit(
            issues,
            Field::Path,
            Rule::PathSeparator,
            Severity::Error,
            "path contains a backslash separator — use forward slashes",
            "Reference the document with a forward-slash path",
        );
    }
}

/// Evaluates the full rule table against a parsed document.
///
/// `path` is the originating path of the document, when known; only the
/// `PATH_SEPARATOR` rule consults it. Issues come back in rule-table order,
/// so two runs over the same input produce identical output.
pub fn evaluate(
    doc: &SkillDocument,
    path: Option<&str>,
    config: &Config,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    validate_name(&mut issues, doc.frontmatter.get("name"), config);
    validate_description(&mut issues, doc.frontmatter.get("description"), config);
    validate_body(&mut issues, &doc.body, config);
    if let Some(p) = path {
        validate_path(&mut issues, p);
    }

    issues
}

// ---------------------------------------------------------------------------
// Rule catalogue
// ---------------------------------------------------------------------------

/// Metadata for a single validation rule.
pub struct RuleInfo {
    pub id: &'static str,
    pub field: &'static str,
    pub severity: &'static str,
    pub message: &'static str,
    pub remediation: &'static str,
}

/// Returns the [`RuleInfo`] catalogue for every validation rule.
///
/// Used by the `list-rules` CLI command to display rule metadata without
/// running a validation.
pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: "PRESENCE",
            field: "name",
            severity: "error",
            message: "name field is required and cannot be empty",
            remediation: "Add a 'name: my-skill' line to the frontmatter",
        },
        RuleInfo {
            id: "MAX_LENGTH",
            field: "name",
            severity: "error",
            message: "name exceeds 64 characters",
            remediation: "Shorten the skill name to 64 characters or fewer",
        },
        RuleInfo {
            id: "CHARSET",
            field: "name",
            severity: "error",
            message: "name must contain only lowercase letters, numbers, and hyphens",
            remediation: "Rename to lowercase-kebab-case (e.g. 'my-skill' not 'My_Skill')",
        },
        RuleInfo {
            id: "RESERVED_WORD",
            field: "name",
            severity: "error",
            message: "name contains a reserved brand word",
            remediation: "Choose a name that does not reference brand names",
        },
        RuleInfo {
            id: "PRESENCE",
            field: "description",
            severity: "error",
            message: "description field is required and cannot be empty",
            remediation: "Add a meaningful description field to the frontmatter",
        },
        RuleInfo {
            id: "MAX_LENGTH",
            field: "description",
            severity: "error",
            message: "description exceeds 1024 characters",
            remediation: "Shorten the description to 1024 characters or fewer",
        },
        RuleInfo {
            id: "MARKUP",
            field: "description",
            severity: "error",
            message: "description contains XML/HTML tags",
            remediation: "Remove angle-bracket markup from the description",
        },
        RuleInfo {
            id: "WHAT_WHEN",
            field: "description",
            severity: "warning",
            message: "description lacks what-it-does and when-to-use context",
            remediation: "Append 'Use when <specific trigger condition>.' to the description",
        },
        RuleInfo {
            id: "LINE_LIMIT",
            field: "body",
            severity: "warning",
            message: "body exceeds 500 lines",
            remediation: "Split the body into separate reference files",
        },
        RuleInfo {
            id: "PATH_SEPARATOR",
            field: "body",
            severity: "warning",
            message: "body contains a Windows-style backslash path",
            remediation: "Replace backslash paths with forward slashes",
        },
        RuleInfo {
            id: "PATH_SEPARATOR",
            field: "path",
            severity: "error",
            message: "document path contains a backslash separator",
            remediation: "Reference the document with a forward-slash path",
        },
        RuleInfo {
            id: "MISSING_FRONTMATTER",
            field: "frontmatter",
            severity: "error",
            message: "document does not start with a '---' frontmatter block",
            remediation: "Begin the document with a '---'-delimited metadata block",
        },
        RuleInfo {
            id: "MALFORMED_FRONTMATTER",
            field: "frontmatter",
            severity: "error",
            message: "frontmatter block is unclosed or contains a line with no ':'",
            remediation: "Ensure every frontmatter line is 'key: value' and the block ends with '---'",
        },
    ]
}
