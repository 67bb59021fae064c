//! Skill document model and frontmatter parsing.
//!
//! A skill document starts with a `---`-delimited metadata block of
//! `key: value` pairs followed by a free-form Markdown body:
//!
//! ```text
//! ---
//! name: pdf-extractor
//! description: Extracts tables from PDF files. Use when the user uploads a PDF.
//! ---
//! # Instructions
//! ...
//! ```
//!
//! A lightweight YAML-subset parser is used instead of a full YAML crate.
//! Skill frontmatter only ever uses scalar `key: value` pairs, which is all
//! the agent-skills format requires.

use std::fmt;

/// Structural failure while reading a frontmatter block.
///
/// These are hard errors, unlike rule violations: without a parseable block
/// there are no fields to validate, so processing of the document stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The document does not begin with an opening `---` line.
    MissingFrontmatter,
    /// The block is structurally broken: either a non-blank line inside it
    /// has no `:` separator, or the closing `---` is absent.
    MalformedFrontmatter { line: usize, reason: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingFrontmatter => {
                write!(f, "missing frontmatter (document must start with '---')")
            }
            ParseError::MalformedFrontmatter { line, reason } => {
                write!(f, "malformed frontmatter at line {line}: {reason}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// An ordered frontmatter mapping.
///
/// Insertion order is preserved; a duplicate key keeps its original position
/// but takes the value of the last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    entries: Vec<(String, String)>,
}

impl Frontmatter {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Inserts a key, replacing the value in place if the key exists.
    pub fn insert(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Frontmatter {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut fm = Frontmatter::default();
        for (k, v) in iter {
            fm.insert(k, v);
        }
        fm
    }
}

/// A parsed skill document.
///
/// Constructed once from a document's raw text via [`SkillDocument::parse`]
/// and immutable thereafter.
#[derive(Debug, Clone)]
pub struct SkillDocument {
    pub raw_text: String,
    pub frontmatter: Frontmatter,
    /// Everything after the closing `---` line.
    pub body: String,
}

impl SkillDocument {
    /// Parses a raw document into frontmatter and body.
    ///
    /// The opening `---` must be the very first line. Inside the block each
    /// line is split on the first `:`; keys and values are trimmed, and a
    /// value wrapped in matching single or double quotes keeps only the
    /// inner content. Blank lines inside the block are skipped.
    ///
    /// # Errors
    ///
    /// - [`ParseError::MissingFrontmatter`] when the first line is not `---`.
    /// - [`ParseError::MalformedFrontmatter`] when an in-block non-blank line
    ///   has no `:`, or the closing `---` is never found.
    pub fn parse(raw: &str) -> Result<SkillDocument, ParseError> {
        let mut lines = raw.lines().enumerate();

        let Some((_, first)) = lines.next() else {
            return Err(ParseError::MissingFrontmatter);
        };
        if first.trim() != "---" {
            return Err(ParseError::MissingFrontmatter);
        }

        let mut frontmatter = Frontmatter::default();
        let mut body_start: Option<usize> = None;

        for (idx, line) in lines {
            let line_num = idx + 1; // 1-indexed for diagnostics

            if line.trim() == "---" {
                // Byte offset of the line after the closing delimiter.
                body_start = Some(line_offset(raw, idx + 1));
                break;
            }

            if line.trim().is_empty() {
                continue;
            }

            let Some(colon) = line.find(':') else {
                return Err(ParseError::MalformedFrontmatter {
                    line: line_num,
                    reason: format!("expected 'key: value', found {line:?}"),
                });
            };

            let key = line[..colon].trim();
            let value = unquote(line[colon + 1..].trim());
            if key.is_empty() {
                return Err(ParseError::MalformedFrontmatter {
                    line: line_num,
                    reason: "empty key before ':'".to_string(),
                });
            }
            frontmatter.insert(key, value);
        }

        let Some(start) = body_start else {
            return Err(ParseError::MalformedFrontmatter {
                line: raw.lines().count(),
                reason: "frontmatter block is never closed (missing '---')".to_string(),
            });
        };

        Ok(SkillDocument {
            raw_text: raw.to_string(),
            frontmatter,
            body: raw[start..].to_string(),
        })
    }
}

/// Serializes a frontmatter mapping back into a delimited block.
///
/// Produces the canonical form `---\nkey: value\n...\n---\n`. Round-trips
/// through [`SkillDocument::parse`] for any mapping whose keys and values
/// contain no newlines or leading/trailing whitespace.
pub fn serialize_frontmatter(fields: &Frontmatter) -> String {
    let mut out = String::from("---\n");
    for (k, v) in fields.iter() {
        out.push_str(k);
        out.push_str(": ");
        out.push_str(v);
        out.push('\n');
    }
    out.push_str("---\n");
    out
}

/// Strips one layer of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Byte offset of the start of line `n` (0-indexed) in `text`.
///
/// Returns `text.len()` when the text has fewer than `n` lines, so slicing
/// from the result is always in bounds.
fn line_offset(text: &str, n: usize) -> usize {
    let mut offset = 0;
    for (i, line) in text.split_inclusive('\n').enumerate() {
        if i == n {
            return offset;
        }
        offset += line.len();
    }
    offset
}
