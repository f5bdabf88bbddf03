//! Text (terminal) reporter with colors and formatting
//!
//! Colors come from `console`, which disables them automatically when
//! stdout is not a terminal.

use super::RenderOptions;
use crate::models::{Finding, Grade, Report};
use anyhow::Result;
use console::{style, StyledObject};

const RULE: &str = "──────────────────────────────────────";

/// Grade colors
fn grade_style<D>(grade: Grade, value: D) -> StyledObject<D> {
    match grade {
        Grade::Excellent => style(value).green(),
        Grade::Good => style(value).green().bright(),
        Grade::Fair => style(value).yellow(),
        Grade::Poor => style(value).red(),
    }
}

/// Render report as formatted terminal output
pub fn render(report: &Report, options: RenderOptions) -> Result<String> {
    let mut out = String::new();

    // Header
    out.push_str(&format!("\n{}\n", style("API Specification Score").bold()));
    out.push_str(&format!("{}\n", style(RULE).dim()));
    out.push_str(&format!(
        "Score: {}  Grade: {}\n",
        grade_style(report.grade, format!("{}/100", report.score)).bold(),
        grade_style(report.grade, report.grade).bold()
    ));

    let m = &report.metrics;
    out.push_str(&format!(
        "Operations: {}  Described: {}  Examples: {}\n\n",
        m.total_operations,
        format_percent(m.description_coverage, options.thresholds.description_coverage),
        format_percent(m.example_coverage, options.thresholds.example_coverage)
    ));

    render_section(&mut out, "ISSUES", &report.issues, |s| style(s).red());
    render_section(&mut out, "SUGGESTIONS", &report.suggestions, |s| {
        style(s).yellow()
    });

    if options.explain_score {
        render_breakdown(&mut out, report);
    }

    out.push_str(&format!("{}\n", style(report.grade.banner()).dim()));

    Ok(out)
}

fn render_section(
    out: &mut String,
    title: &str,
    findings: &[Finding],
    marker: impl Fn(&'static str) -> StyledObject<&'static str>,
) {
    out.push_str(&format!(
        "{} ({})\n",
        style(title).bold(),
        findings.len()
    ));
    if findings.is_empty() {
        out.push_str(&format!("  {}\n", style("none").dim()));
    }
    for finding in findings {
        out.push_str(&format!(
            "  {} {}  {}\n",
            marker("•"),
            finding.message,
            style(format!("[{}]", finding.category)).dim()
        ));
    }
    out.push('\n');
}

fn render_breakdown(out: &mut String, report: &Report) {
    let b = &report.breakdown;
    out.push_str(&format!("{}\n", style("SCORE BREAKDOWN").bold()));
    out.push_str(&format!("  Base                  {:>5}\n", b.base));
    out.push_str(&format!(
        "  Issues ({:>3})          {:>5}\n",
        b.issue_count, -b.issue_penalty
    ));
    out.push_str(&format!(
        "  Suggestions ({:>3})     {:>5}\n",
        b.suggestion_count, -b.suggestion_penalty
    ));
    for bonus in &b.bonuses {
        out.push_str(&format!("  + {:<20}{:>5}\n", bonus.name, format!("+{}", bonus.points)));
    }
    out.push_str(&format!("  {}\n", style("─────────────────────────────").dim()));
    out.push_str(&format!("  Raw                   {:>5}\n", b.raw_score));
    out.push_str(&format!("  Final (0-100)         {:>5}\n\n", b.score));
}

/// Format a coverage percentage, green when it meets `threshold`
fn format_percent(value: f64, threshold: f64) -> String {
    percent_style(value, threshold).to_string()
}

fn percent_style(value: f64, threshold: f64) -> StyledObject<String> {
    let text = format!("{:.0}%", value.round());
    if value >= threshold {
        style(text).green()
    } else {
        style(text).red()
    }
}
