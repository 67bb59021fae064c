//! # skillcheck
//!
//! Metadata validation and task filename allocation for AI agent skills.
//!
//! `skillcheck` validates skill documents (`SKILL.md` files with YAML-style
//! frontmatter) against the agent-skills naming and metadata rules, and
//! allocates collision-free, date-sequenced task filenames of the form
//! `DD-MM-YYYY-[NNN]-task-name.xml`.
//!
//! ## Quick start
//!
//! ```rust
//! use skillcheck::{config::Config, validate};
//!
//! let doc = "---\nname: pdf-extractor\ndescription: Extracts tables from PDF files. Use when the user uploads a PDF.\n---\n# Body\n";
//! let report = validate::validate(doc, "SKILL.md", &Config::default());
//! assert!(report.passed);
//! ```
//!
//! ## Architecture
//!
//! The crate is organized around a pipeline:
//!
//! 1. **[`document`]** — parse the `---`-delimited frontmatter block into a
//!    [`document::SkillDocument`].
//! 2. **[`rules`]** — apply the fixed, ordered rule table to the parsed
//!    fields and the document body.
//! 3. **[`body`]** — structural metrics (line counts, backslash-path scan)
//!    consumed by the rule engine.
//! 4. **[`issue`]** — core data types ([`issue::ValidationIssue`],
//!    [`issue::ValidationReport`]).
//! 5. **[`output`]** — format reports as pretty text or JSON.
//!
//! The **[`allocator`]** is an independent utility with no dependency on the
//! validation pipeline: given a directory and a date it computes the next
//! unused task-file counter. Allocation does not reserve the name; callers
//! commit by exclusive-create and retry on collision (see
//! [`allocator::create_task_file`]).
//!
//! ## Rule set
//!
//! | Field | Rule | Severity |
//! |-------|------|----------|
//! | `name` | presence, max length (64), charset, reserved word | error |
//! | `description` | presence, max length (1024), markup | error |
//! | `description` | what+when completeness | warning |
//! | `body` | line limit (500) | warning |
//! | `path` | backslash separator | error |

pub mod allocator;
pub mod body;
pub mod config;
pub mod document;
pub mod issue;
pub mod output;
pub mod rules;
pub mod validate;
