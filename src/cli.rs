use clap::{Parser, Subcommand};
use skillcheck::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skillcheck",
    version,
    about = "Metadata validation and task filename allocation for AI agent skills"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a skill document's frontmatter and body
    Check {
        /// Path to the skill document (e.g. SKILL.md)
        path: PathBuf,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate every SKILL.md found under a directory
    #[command(name = "check-all")]
    CheckAll {
        /// Path to a directory containing skill documents
        path: PathBuf,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Allocate the next task filename for a directory and date
    Allocate {
        /// Directory the task file will live in
        directory: PathBuf,

        /// Kebab-case task name (e.g. refactor-parser)
        task_name: String,

        /// Date prefix as DD-MM-YYYY (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Atomically create the file, retrying on collision
        #[arg(long)]
        create: bool,
    },

    /// List all validation rules with descriptions
    ListRules,
}
