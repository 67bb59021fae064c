mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use rayon::prelude::*;
use skillcheck::allocator::{self, TaskDate};
use skillcheck::issue::ValidationReport;
use skillcheck::{config, output, rules, validate};
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            path,
            format,
            output: output_path,
            strict,
            config: config_path,
        } => {
            let config = load_config(config_path.as_deref(), strict);

            let text = std::fs::read_to_string(&path).unwrap_or_else(|e| {
                eprintln!("Error: cannot read {}: {e}", path.display());
                std::process::exit(2);
            });

            let report = validate::validate(&text, &path.display().to_string(), &config);
            let formatted = output::format_report(&report, &format);

            if let Some(out_path) = output_path {
                std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
                    eprintln!("Error writing output: {e}");
                    std::process::exit(2);
                });
                eprintln!("Output written to {}", out_path.display());
            } else {
                print!("{formatted}");
            }

            std::process::exit(if report.passed { 0 } else { 1 });
        }

        Commands::CheckAll {
            path,
            format,
            strict,
            config: config_path,
        } => {
            if !path.exists() {
                eprintln!("Error: path does not exist: {}", path.display());
                std::process::exit(2);
            }

            let documents = find_skill_documents(&path);
            if documents.is_empty() {
                eprintln!(
                    "Error: no skill documents found under '{}' (no SKILL.md anywhere)",
                    path.display()
                );
                std::process::exit(2);
            }

            let config = load_config(config_path.as_deref(), strict);

            // Each document is independent, so validate the batch in parallel
            // and print in discovery order afterwards.
            let reports: Vec<(PathBuf, ValidationReport)> = documents
                .par_iter()
                .map(|doc_path| {
                    let report = match std::fs::read_to_string(doc_path) {
                        Ok(text) => {
                            validate::validate(&text, &doc_path.display().to_string(), &config)
                        }
                        Err(e) => {
                            eprintln!("Error: cannot read {}: {e}", doc_path.display());
                            std::process::exit(2);
                        }
                    };
                    (doc_path.clone(), report)
                })
                .collect();

            for (_, report) in &reports {
                print!("{}", output::format_report(report, &format));
            }

            if matches!(format, output::OutputFormat::Pretty) {
                print!("{}", format_collection_summary(&path, &reports));
            }

            let all_passed = reports.iter().all(|(_, r)| r.passed);
            std::process::exit(if all_passed { 0 } else { 1 });
        }

        Commands::Allocate {
            directory,
            task_name,
            date,
            create,
        } => {
            let date = match date {
                Some(s) => s.parse::<TaskDate>().unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(2);
                }),
                None => TaskDate::today(),
            };

            let result = if create {
                allocator::create_task_file(&directory, &date, &task_name)
            } else {
                allocator::allocate(&directory, &date, &task_name)
            };

            match result {
                Ok(alloc) => println!("{}", alloc.filename),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(2);
                }
            }
        }

        Commands::ListRules => {
            let rules = rules::rules();
            println!("{}", "Validation Rules".bold().underline());
            println!();

            let mut current_field = "";
            for rule in &rules {
                if rule.field != current_field {
                    if !current_field.is_empty() {
                        println!();
                    }
                    println!("  {}", rule.field.bold());
                    current_field = rule.field;
                }

                let severity = match rule.severity {
                    "error" => "ERROR".red().bold().to_string(),
                    "warning" => " WARN".yellow().bold().to_string(),
                    _ => rule.severity.to_string(),
                };

                println!(
                    "    [{severity}] {id:<22} {message}",
                    id = rule.id,
                    message = rule.message,
                );
            }

            println!();
            println!("  Total: {} rules", rules.len());
        }
    }
}

fn load_config(config_path: Option<&Path>, strict: bool) -> config::Config {
    let mut config = config::Config::load(config_path).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });
    if strict {
        config.strict.enabled = true;
    }
    config
}

/// Returns every `SKILL.md` under `path`, sorted for stable output order.
fn find_skill_documents(path: &Path) -> Vec<PathBuf> {
    let mut docs: Vec<PathBuf> = walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.file_name() == "SKILL.md")
        .map(|e| e.into_path())
        .collect();

    docs.sort();
    docs
}

/// Renders a compact summary table after all individual reports have been printed.
fn format_collection_summary(
    collection_path: &Path,
    reports: &[(PathBuf, ValidationReport)],
) -> String {
    let mut out = String::new();
    let separator = "─".repeat(54);

    out.push('\n');
    out.push_str(&format!(
        "{}\n",
        format!(
            "  Collection Summary: {}  ({} documents)",
            collection_path.display(),
            reports.len()
        )
        .bold()
        .underline()
    ));
    out.push_str(&format!("{}\n", separator.dimmed()));

    let mut n_failed = 0usize;
    let mut n_passed = 0usize;

    for (doc_path, report) in reports {
        let (icon, status_str) = if report.passed {
            n_passed += 1;
            ("✓".green().to_string(), "PASS".green().bold().to_string())
        } else {
            n_failed += 1;
            ("✗".red().to_string(), "FAIL".red().bold().to_string())
        };

        // The parent directory names the skill; every document is SKILL.md.
        let name = doc_path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| doc_path.display().to_string());

        let (errors, warnings) = report.count_by_severity();
        out.push_str(&format!(
            "  {icon}  {name:<26} {status_str}  {errors}e {warnings}w\n"
        ));
    }

    out.push_str(&format!("{}\n", separator.dimmed()));
    out.push_str(&format!(
        "  Total: {}  {}\n",
        format!("{} failed", n_failed).red().bold(),
        format!("{} passed", n_passed).green().bold(),
    ));

    out
}
