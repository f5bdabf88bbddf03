//! JSON reporter
//!
//! Outputs the full Report as pretty-printed or single-line JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::models::Report;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render report as single-line JSON
pub fn render_compact(report: &Report) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["grade"], "excellent");
        assert_eq!(parsed["issues"][0]["kind"], "issue");
        assert_eq!(parsed["suggestions"][1]["category"], "schemas");
        assert_eq!(parsed["metrics"]["total_operations"], 4);
    }

    #[test]
    fn test_compact_matches_pretty() {
        let report = test_report();
        let compact: serde_json::Value =
            serde_json::from_str(&render_compact(&report).unwrap()).unwrap();
        let pretty: serde_json::Value = serde_json::from_str(&render(&report).unwrap()).unwrap();
        assert_eq!(compact, pretty);
    }

    #[test]
    fn test_json_render_round_trips() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let back: Report = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(back, report);
    }
}
