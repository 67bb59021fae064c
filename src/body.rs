//! Structural metrics over document bodies.
//!
//! Pure, deterministic helpers consumed by the rule engine. Nothing here
//! re-parses frontmatter; callers pass the body text they already have.

use regex::Regex;
use std::sync::LazyLock;

/// Windows-style backslash path: a drive-letter prefix (`C:\`) or a `\`
/// between two path-segment characters. Requiring segment characters on
/// both sides avoids flagging escape sequences like `\n` inside code blocks.
static RE_BACKSLASH_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]:\\|[a-zA-Z0-9_.][\\][a-zA-Z0-9_.]").unwrap());

/// Counts the lines of `text`.
///
/// Each newline terminates a line; a non-empty trailing fragment with no
/// final newline counts as one more line.
///
/// ```
/// use skillcheck::body::count_lines;
///
/// assert_eq!(count_lines(""), 0);
/// assert_eq!(count_lines("a\nb\n"), 2);
/// assert_eq!(count_lines("a\nb"), 2);
/// ```
pub fn count_lines(text: &str) -> usize {
    let newlines = text.bytes().filter(|&b| b == b'\n').count();
    let has_trailing_fragment = !text.is_empty() && !text.ends_with('\n');
    newlines + usize::from(has_trailing_fragment)
}

/// Returns `true` if `text` contains a Windows-style backslash path.
///
/// This is a heuristic: a lone backslash (escape sequence, LaTeX command)
/// does not match, only a backslash wedged between path-segment characters
/// or following a drive letter.
///
/// ```
/// use skillcheck::body::contains_backslash_path;
///
/// assert!(contains_backslash_path("see docs\\readme.md"));
/// assert!(contains_backslash_path("C:\\Users\\me"));
/// assert!(!contains_backslash_path("prints \\n then stops"));
/// ```
pub fn contains_backslash_path(text: &str) -> bool {
    RE_BACKSLASH_PATH.is_match(text)
}
