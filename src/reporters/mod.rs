//! Output reporters for specscore results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown

mod json;
mod markdown;
mod text;

use crate::config::ThresholdConfig;
use crate::models::Report;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Rendering switches shared by all reporters
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Include the score breakdown
    pub explain_score: bool,
    /// Single-line JSON
    pub compact: bool,
    /// Coverage thresholds the report was evaluated with, used for coloring
    pub thresholds: ThresholdConfig,
}

/// Render a report in the specified format
pub fn report(report: &Report, format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(report, fmt, RenderOptions::default())
}

/// Render a report using an OutputFormat enum
pub fn report_with_format(
    report: &Report,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report, options),
        OutputFormat::Json if options.compact => json::render_compact(report),
        OutputFormat::Json => json::render(report),
        OutputFormat::Markdown => markdown::render(report, options),
    }
}

/// Render with terminal styling turned off, for reports written to disk.
///
/// The global color setting is restored afterwards.
pub fn report_uncolored(
    report: &Report,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String> {
    let colors = console::colors_enabled();
    console::set_colors_enabled(false);
    let rendered = report_with_format(report, format, options);
    console::set_colors_enabled(colors);
    rendered
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    }
}
