//! Index configuration.
//!
//! Handles loading and validating `index.toml`. Stock defaults are the values
//! the plan collection has always used; a user file in the plans directory
//! overrides any subset of them.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! output = "README.md"      # Generated file, relative to the plans directory
//! exclude = []              # Extra markdown files that are never plans
//!
//! # Categories listed here come first, in this order. Any other category
//! # follows, sorted alphabetically.
//! category_order = [
//!     "Spring & Spring Boot",
//!     "JVM Internals",
//!     ...
//! ]
//! ```
//!
//! `README.md`, `CLAUDE.md` and the configured output file are always
//! excluded from discovery; `exclude` can only add to that set. Unknown keys
//! are rejected to catch typos early.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the optional config file inside the plans directory.
pub const CONFIG_FILE: &str = "index.toml";

/// Markdown files that are never plans, whatever the config says.
pub const ALWAYS_EXCLUDED: [&str; 2] = ["README.md", "CLAUDE.md"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration for one index run.
///
/// Passed explicitly into discovery (exclusions) and cataloguing (category
/// order) so every stage is a function of its inputs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// File name of the generated index.
    pub output: String,
    /// Markdown files skipped during discovery, on top of [`ALWAYS_EXCLUDED`].
    pub exclude: Vec<String>,
    /// Preferred category order for the rendered listing.
    pub category_order: Vec<String>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            output: "README.md".to_string(),
            exclude: Vec::new(),
            category_order: [
                "Spring & Spring Boot",
                "JVM Internals",
                "Build Tools",
                "Data & Messaging",
                "APIs & Protocols",
                "Observability",
                "Infrastructure",
                "Languages & Paradigms",
                "NewSQL",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl IndexConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.trim().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        if self.output.contains('/') || self.output.contains('\\') {
            return Err(ConfigError::Validation(
                "output must be a file name, not a path".into(),
            ));
        }
        let mut seen = BTreeSet::new();
        for category in &self.category_order {
            if !seen.insert(category.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "category_order lists \"{category}\" more than once"
                )));
            }
        }
        Ok(())
    }

    /// Effective exclusion set: [`ALWAYS_EXCLUDED`], the `exclude` list, and
    /// the output file.
    pub fn excluded(&self) -> BTreeSet<String> {
        let mut set: BTreeSet<String> = ALWAYS_EXCLUDED.iter().map(|s| s.to_string()).collect();
        set.extend(self.exclude.iter().cloned());
        set.insert(self.output.clone());
        set
    }
}

/// Load the config for a plans directory, falling back to stock defaults.
///
/// Keys missing from `index.toml` keep their default values.
pub fn load_config(dir: &Path) -> Result<IndexConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(IndexConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: IndexConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `index.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# plan-index configuration
# ========================
# All settings are optional. Values shown below are the defaults.
# Place this file as index.toml in the plans directory.
# Unknown keys will cause an error.

# Generated index file, written inside the plans directory.
# It is never picked up as a plan itself.
output = "README.md"

# Extra markdown files that are not plans.
# README.md and CLAUDE.md are always skipped and need not be listed.
exclude = []

# Categories listed here are rendered first, in this order.
# Categories not listed follow, sorted alphabetically.
# Setting this key replaces the whole list.
category_order = [
    "Spring & Spring Boot",
    "JVM Internals",
    "Build Tools",
    "Data & Messaging",
    "APIs & Protocols",
    "Observability",
    "Infrastructure",
    "Languages & Paradigms",
    "NewSQL",
]
"##
}
