//! Configuration module for specscore
//!
//! This module handles:
//! - Project-level configuration (specscore.toml)
//! - Scoring constants and coverage thresholds
//! - Grade cutoffs
//! - CLI defaults

mod project_config;

pub use project_config::{
    example_config, load_config_file, load_project_config, CliDefaults, GradeCutoffs,
    ProjectConfig, ScoringConfig, ThresholdConfig, CONFIG_FILE_NAMES,
};
