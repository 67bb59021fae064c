//! Configuration loading and management.
//!
//! The default configuration file is `skillcheck.toml` in the current
//! working directory. Every field has a default that reproduces the
//! agent-skills rule set, so the file can be omitted entirely.
//!
//! ```toml
//! # top-level keys must come before the first table header
//! reserved_words = ["anthropic", "claude"]
//!
//! [limits]
//! max_name_length = 64
//! max_description_length = 1024
//! max_body_lines = 500
//!
//! [strict]
//! enabled = false
//! ```

use std::path::Path;

/// Main configuration for the validator.
///
/// Loaded from a TOML file (typically `skillcheck.toml`). All fields carry
/// defaults matching the published agent-skills limits.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Field length and body size limits.
    pub limits: LimitsConfig,
    /// When strict mode is enabled, warnings fail the report.
    pub strict: StrictConfig,
    /// Substrings disallowed in the `name` field (case-insensitive).
    pub reserved_words: Vec<String>,
}

/// Field length and body size limits.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_name_length: usize,
    pub max_description_length: usize,
    pub max_body_lines: usize,
}

/// Strict-mode configuration.
///
/// When [`enabled`](StrictConfig::enabled) is `true`, any warning-severity
/// issue causes [`ValidationReport::passed`](crate::issue::ValidationReport)
/// to be `false`.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct StrictConfig {
    /// Set to `true` to treat warnings as errors.
    pub enabled: bool,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        LimitsConfig {
            max_name_length: 64,
            max_description_length: 1024,
            max_body_lines: 500,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            limits: LimitsConfig::default(),
            strict: StrictConfig::default(),
            reserved_words: vec!["anthropic".to_string(), "claude".to_string()],
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `skillcheck.toml` in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// Reserved words are normalized to lowercase after loading so the rule
    /// engine can match against a pre-lowercased name without re-allocating.
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when the explicit path does not exist, the file
    /// cannot be read, or the TOML content fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Config, String> {
        let config_path = if let Some(p) = path {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                return Err(format!("Config file not found: {}", p.display()));
            }
        } else {
            let default_path = Path::new("skillcheck.toml");
            if default_path.exists() {
                Some(default_path.to_path_buf())
            } else {
                None
            }
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
                let mut config: Config = toml::from_str(&content)
                    .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;
                for w in &mut config.reserved_words {
                    *w = w.to_lowercase();
                }
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }
}
