//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Suitable for pull request comments and CI summaries. Output contains no
//! timestamps so identical reports render identically.

use super::RenderOptions;
use crate::models::{Finding, Grade, Report};
use anyhow::Result;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &Report, options: RenderOptions) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push('\n');

    md.push_str(&render_coverage(report));
    md.push('\n');

    md.push_str(&render_findings("Issues", &report.issues));
    md.push('\n');

    md.push_str(&render_findings("Suggestions", &report.suggestions));

    if options.explain_score {
        md.push('\n');
        md.push_str(&render_breakdown(report));
    }

    Ok(md)
}

fn render_header(report: &Report) -> String {
    let grade_emoji = match report.grade {
        Grade::Excellent => "🏆",
        Grade::Good => "⭐",
        Grade::Fair => "⚠️",
        Grade::Poor => "❌",
    };

    format!(
        r#"# {} API Specification Report

**Score: {}/100** | **Grade: {}**

{}
"#,
        grade_emoji,
        report.score,
        report.grade,
        report.grade.banner()
    )
}

fn render_coverage(report: &Report) -> String {
    let m = &report.metrics;
    format!(
        r#"## Coverage

| Metric | Value |
|--------|-------|
| Operations | {} |
| Described operations | {} ({:.0}%) |
| Operations with response examples | {} ({:.0}%) |
| Schemas | {} |
| Parameters | {} |
| Responses | {} |
"#,
        m.total_operations,
        m.described_operations,
        m.description_coverage.round(),
        m.exampled_operations,
        m.example_coverage.round(),
        m.total_schemas,
        m.total_parameters,
        m.total_responses
    )
}

fn render_findings(title: &str, findings: &[Finding]) -> String {
    let mut md = format!("## {} ({})\n\n", title, findings.len());
    if findings.is_empty() {
        md.push_str("✅ None\n");
        return md;
    }
    for finding in findings {
        md.push_str(&format!("- {} `{}`\n", finding.message, finding.category));
    }
    md
}

fn render_breakdown(report: &Report) -> String {
    let b = &report.breakdown;
    let mut md = String::from("## Score Breakdown\n\n| Component | Points |\n|-----------|--------|\n");
    md.push_str(&format!("| Base | {} |\n", b.base));
    md.push_str(&format!("| Issues ({}) | -{} |\n", b.issue_count, b.issue_penalty));
    md.push_str(&format!(
        "| Suggestions ({}) | -{} |\n",
        b.suggestion_count, b.suggestion_penalty
    ));
    for bonus in &b.bonuses {
        md.push_str(&format!("| Bonus: {} | +{} |\n", bonus.name, bonus.points));
    }
    md.push_str(&format!("| **Final** | **{}** |\n", b.score));
    md
}
