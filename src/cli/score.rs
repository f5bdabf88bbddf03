//! Score command - evaluate one document and render the report

use anyhow::{Context, Result};
use console::style;
use specscore::checks::evaluate_with_config;
use specscore::config::{load_config_file, load_project_config, ProjectConfig};
use specscore::document::load_document;
use specscore::models::Report;
use specscore::reporters::{self, OutputFormat, RenderOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

pub struct ScoreArgs {
    pub file: PathBuf,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub write_report: bool,
    pub explain_score: bool,
    pub compact: bool,
    pub config: Option<PathBuf>,
}

/// Run the score command
pub fn run(args: ScoreArgs) -> Result<()> {
    let config = resolve_config(&args.file, args.config.as_deref())?;

    let format_name = args
        .format
        .or_else(|| config.defaults.format.clone())
        .unwrap_or_else(|| "text".to_string());
    let format = OutputFormat::from_str(&format_name)?;

    let doc = load_document(&args.file)
        .with_context(|| format!("Could not score {}", args.file.display()))?;

    let report = evaluate_with_config(&doc, &config);
    info!(
        "{}: score {} ({} findings: {} issues, {} suggestions)",
        args.file.display(),
        report.score,
        report.finding_count(),
        report.issues.len(),
        report.suggestions.len()
    );

    let options = RenderOptions {
        explain_score: args.explain_score,
        compact: args.compact,
        thresholds: config.thresholds,
    };

    if args.write_report {
        let sibling = sibling_report_path(&args.file, format);
        write_report_file(&sibling, &report, format, options)?;
        eprintln!(
            "{}Report written to: {}",
            style("📄 ").bold(),
            style(sibling.display()).cyan()
        );
    }

    match args.output {
        Some(out_path) => {
            write_report_file(&out_path, &report, format, options)?;
            println!(
                "{}Report written to: {}",
                style("📄 ").bold(),
                style(out_path.display()).cyan()
            );
        }
        None => println!(
            "{}",
            reporters::report_with_format(&report, format, options)?
        ),
    }

    Ok(())
}

/// Files never carry terminal escapes, whatever stdout supports
fn write_report_file(
    path: &Path,
    report: &Report,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<()> {
    let output = reporters::report_uncolored(report, format, options)?;
    std::fs::write(path, output).with_context(|| format!("Failed to write {}", path.display()))
}

/// Explicit config must load; otherwise look next to the document
fn resolve_config(file: &Path, explicit: Option<&Path>) -> Result<ProjectConfig> {
    if let Some(path) = explicit {
        debug!("Using config {}", path.display());
        return load_config_file(path);
    }
    let dir = match file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    Ok(load_project_config(dir))
}

/// `api/openapi.yaml` → `api/openapi.report.json` for JSON output
fn sibling_report_path(file: &Path, format: OutputFormat) -> PathBuf {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "specification".to_string());
    file.with_file_name(format!(
        "{}.report.{}",
        stem,
        reporters::file_extension(format)
    ))
}
