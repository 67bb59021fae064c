use skillcheck::document::{serialize_frontmatter, Frontmatter, ParseError, SkillDocument};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse(raw: &str) -> SkillDocument {
    SkillDocument::parse(raw).expect("document should parse")
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[test]
fn parses_name_and_description() {
    let doc = parse("---\nname: my-skill\ndescription: Does things\n---\nbody\n");
    assert_eq!(doc.frontmatter.get("name"), Some("my-skill"));
    assert_eq!(doc.frontmatter.get("description"), Some("Does things"));
    assert_eq!(doc.body, "body\n");
}

#[test]
fn extra_keys_are_preserved() {
    let doc = parse("---\nname: a\ndescription: b\ncolor: blue\nmodel: opus\n---\n");
    assert_eq!(doc.frontmatter.get("color"), Some("blue"));
    assert_eq!(doc.frontmatter.get("model"), Some("opus"));
    assert_eq!(doc.frontmatter.len(), 4);
}

#[test]
fn values_are_trimmed() {
    let doc = parse("---\nname:    spaced-out   \n---\n");
    assert_eq!(doc.frontmatter.get("name"), Some("spaced-out"));
}

#[test]
fn quoted_values_lose_surrounding_quotes() {
    let doc = parse("---\nname: \"quoted\"\ndescription: 'single'\n---\n");
    assert_eq!(doc.frontmatter.get("name"), Some("quoted"));
    assert_eq!(doc.frontmatter.get("description"), Some("single"));
}

#[test]
fn inner_quotes_survive() {
    let doc = parse("---\ndescription: it's \"fine\" really\n---\n");
    assert_eq!(doc.frontmatter.get("description"), Some("it's \"fine\" really"));
}

#[test]
fn duplicate_keys_take_last_occurrence() {
    let doc = parse("---\nname: first\nname: second\n---\n");
    assert_eq!(doc.frontmatter.get("name"), Some("second"));
    assert_eq!(doc.frontmatter.len(), 1);
}

#[test]
fn value_may_contain_colons() {
    let doc = parse("---\ndescription: see https://example.com for details\n---\n");
    assert_eq!(
        doc.frontmatter.get("description"),
        Some("see https://example.com for details")
    );
}

#[test]
fn blank_lines_inside_block_are_skipped() {
    let doc = parse("---\nname: a\n\ndescription: b\n---\n");
    assert_eq!(doc.frontmatter.len(), 2);
}

#[test]
fn body_preserves_everything_after_closing_delimiter() {
    let doc = parse("---\nname: a\n---\nline one\n\nline three");
    assert_eq!(doc.body, "line one\n\nline three");
}

#[test]
fn empty_body_when_document_ends_at_delimiter() {
    let doc = parse("---\nname: a\n---\n");
    assert_eq!(doc.body, "");
}

// ---------------------------------------------------------------------------
// Structural failures
// ---------------------------------------------------------------------------

#[test]
fn missing_opening_delimiter() {
    let err = SkillDocument::parse("name: a\n---\n").unwrap_err();
    assert_eq!(err, ParseError::MissingFrontmatter);
}

#[test]
fn empty_document_is_missing_frontmatter() {
    let err = SkillDocument::parse("").unwrap_err();
    assert_eq!(err, ParseError::MissingFrontmatter);
}

#[test]
fn unclosed_block_is_malformed() {
    // Well-formed key/value lines, but the closing `---` never arrives.
    let err = SkillDocument::parse("---\nname: a\ndescription: b\n").unwrap_err();
    match err {
        ParseError::MalformedFrontmatter { reason, .. } => {
            assert!(reason.contains("never closed"), "unexpected reason: {reason}");
        }
        other => panic!("expected MalformedFrontmatter, got {other:?}"),
    }
}

#[test]
fn line_without_colon_is_malformed() {
    let err = SkillDocument::parse("---\nname: a\nnot a key value line\n---\n").unwrap_err();
    match err {
        ParseError::MalformedFrontmatter { line, .. } => assert_eq!(line, 3),
        other => panic!("expected MalformedFrontmatter, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[test]
fn serialize_then_parse_round_trips() {
    let fields: Frontmatter = [
        ("name", "my-skill"),
        ("description", "Extracts tables. Use when asked."),
        ("color", "green"),
    ]
    .into_iter()
    .collect();

    let doc = parse(&serialize_frontmatter(&fields));
    assert_eq!(doc.frontmatter, fields);
}

#[test]
fn serialized_block_has_empty_body() {
    let fields: Frontmatter = [("name", "a")].into_iter().collect();
    let doc = parse(&serialize_frontmatter(&fields));
    assert_eq!(doc.body, "");
}
