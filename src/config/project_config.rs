//! Project-level configuration support
//!
//! Loads configuration from `specscore.toml` or `.specscorerc.json` in the
//! directory of the document being scored, or from an explicit path.
//!
//! # Configuration Format
//!
//! ```toml
//! # specscore.toml
//!
//! [scoring]
//! issue_penalty = 5
//! suggestion_penalty = 1
//! description_bonus = 5
//! description_bonus_min_length = 50
//! tags_bonus = 3
//! external_docs_bonus = 2
//!
//! [thresholds]
//! description_coverage = 80.0
//! example_coverage = 50.0
//!
//! [grades]
//! excellent = 90
//! good = 70
//! fair = 50
//!
//! [defaults]
//! format = "text"
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Config file names probed next to the document, in priority order
pub const CONFIG_FILE_NAMES: [&str; 2] = ["specscore.toml", ".specscorerc.json"];

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProjectConfig {
    /// Score penalties and bonuses
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Coverage percentages below which a suggestion is raised
    #[serde(default)]
    pub thresholds: ThresholdConfig,

    /// Score cutoffs for the qualitative banner
    #[serde(default)]
    pub grades: GradeCutoffs,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Points removed per finding and awarded per bonus condition
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub issue_penalty: i64,
    pub suggestion_penalty: i64,
    /// Awarded when `info.description` is longer than the minimum length
    pub description_bonus: i64,
    pub description_bonus_min_length: usize,
    pub tags_bonus: i64,
    pub external_docs_bonus: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            issue_penalty: 5,
            suggestion_penalty: 1,
            description_bonus: 5,
            description_bonus_min_length: 50,
            tags_bonus: 3,
            external_docs_bonus: 2,
        }
    }
}

/// Coverage thresholds, as percentages
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub description_coverage: f64,
    pub example_coverage: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            description_coverage: 80.0,
            example_coverage: 50.0,
        }
    }
}

/// Minimum score for each grade
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GradeCutoffs {
    pub excellent: u8,
    pub good: u8,
    pub fair: u8,
}

impl Default for GradeCutoffs {
    fn default() -> Self {
        Self {
            excellent: 90,
            good: 70,
            fair: 50,
        }
    }
}

impl GradeCutoffs {
    /// Check that cutoffs are strictly descending
    pub fn is_valid(&self) -> bool {
        self.excellent > self.good && self.good > self.fair && self.excellent <= 100
    }
}

/// Default CLI settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CliDefaults {
    /// Default output format
    #[serde(default)]
    pub format: Option<String>,
}

/// Load configuration from an explicit file. Failures are errors.
pub fn load_config_file(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: ProjectConfig = if path.extension().is_some_and(|e| e == "json") {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?
    } else {
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))?
    };
    if !config.grades.is_valid() {
        warn!(
            "Grade cutoffs in {} are not descending (excellent > good > fair)",
            path.display()
        );
    }
    Ok(config)
}

/// Load project configuration from `dir`.
///
/// Unreadable or invalid files are logged and skipped; defaults are
/// returned when nothing usable is found.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    for name in CONFIG_FILE_NAMES {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded project config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}", path.display(), e);
            }
        }
    }

    debug!("No project config found in {}, using defaults", dir.display());
    ProjectConfig::default()
}

/// Example config written by `specscore init`
pub fn example_config() -> String {
    r#"# specscore configuration
# Values shown are the defaults.

[scoring]
# Points removed per issue (missing required element)
issue_penalty = 5
# Points removed per suggestion (quality improvement)
suggestion_penalty = 1
# Bonus when info.description is longer than the minimum length
description_bonus = 5
description_bonus_min_length = 50
tags_bonus = 3
external_docs_bonus = 2

[thresholds]
# Percentage of operations with a summary or description
description_coverage = 80.0
# Percentage of operations with a response example
example_coverage = 50.0

[grades]
excellent = 90
good = 70
fair = 50

[defaults]
# text, json or markdown
format = "text"
"#
    .to_string()
}
