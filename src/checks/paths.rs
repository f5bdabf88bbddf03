//! Paths and operation coverage check
//!
//! Walks every recognized operation and measures how many are described
//! and how many show a response example. Coverage below the configured
//! thresholds produces a suggestion naming the rounded percentage.

use super::base::{rounded_percent, Check};
use crate::config::ThresholdConfig;
use crate::document::Document;
use crate::models::{Category, CoverageMetrics, Finding};
use tracing::{debug, trace};

/// Share of `part` in `total` as a percentage, 0 when `total` is 0
fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Count operations, documentation coverage and element totals
pub fn coverage(doc: &Document) -> CoverageMetrics {
    let mut metrics = CoverageMetrics::default();

    for (path, method, op) in doc.operations() {
        metrics.total_operations += 1;
        if op.is_described() {
            metrics.described_operations += 1;
        } else {
            trace!("{} {} has no summary or description", method, path);
        }
        if op.has_response_example() {
            metrics.exampled_operations += 1;
        } else {
            trace!("{} {} has no response example", method, path);
        }
        metrics.total_parameters += op.parameters().count();
        metrics.total_responses += op.responses().count();
    }

    metrics.description_coverage =
        percentage(metrics.described_operations, metrics.total_operations);
    metrics.example_coverage = percentage(metrics.exampled_operations, metrics.total_operations);
    metrics.total_schemas = doc.schemas().map_or(0, |s| s.len());
    metrics
}

pub struct PathsCheck {
    thresholds: ThresholdConfig,
}

impl PathsCheck {
    pub fn new(thresholds: ThresholdConfig) -> Self {
        Self { thresholds }
    }
}

impl Default for PathsCheck {
    fn default() -> Self {
        Self::new(ThresholdConfig::default())
    }
}

impl Check for PathsCheck {
    fn name(&self) -> &'static str {
        "PathsCheck"
    }

    fn description(&self) -> &'static str {
        "Checks that operations exist and are described and exemplified"
    }

    fn category(&self) -> Category {
        Category::Paths
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        if !doc.has_paths() {
            return vec![self.issue("No paths defined".to_string())];
        }

        let metrics = coverage(doc);
        debug!(
            "Operations: {} total, {} described, {} with examples",
            metrics.total_operations, metrics.described_operations, metrics.exampled_operations
        );

        let mut findings = Vec::new();
        if metrics.total_operations == 0 {
            findings.push(self.issue("No HTTP operations defined".to_string()));
        }
        if metrics.description_coverage < self.thresholds.description_coverage {
            findings.push(self.suggestion(format!(
                "Only {}% of operations have a summary or description",
                rounded_percent(metrics.description_coverage)
            )));
        }
        if metrics.example_coverage < self.thresholds.example_coverage {
            findings.push(self.suggestion(format!(
                "Only {}% of operations have response examples",
                rounded_percent(metrics.example_coverage)
            )));
        }
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FindingKind;
    use serde_json::{json, Value};

    fn doc(value: Value) -> Document {
        serde_json::from_value(value).unwrap()
    }

    /// `total` GET operations on distinct paths, the first `described` with
    /// a summary and the first `exampled` with a response example
    fn synthetic(total: usize, described: usize, exampled: usize) -> Document {
        let mut paths = serde_json::Map::new();
        for i in 0..total {
            let mut op = json!({"responses": {"200": {"description": "ok"}}});
            if i < described {
                op["summary"] = json!(format!("op {i}"));
            }
            if i < exampled {
                op["responses"]["200"]["content"] =
                    json!({"application/json": {"schema": {"example": {"id": i}}}});
            }
            paths.insert(format!("/r{i}"), json!({ "get": op }));
        }
        doc(json!({ "paths": paths }))
    }

    #[test]
    fn test_no_paths_is_terminal() {
        let findings = PathsCheck::default().check(&doc(json!({})));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "No paths defined");

        let findings = PathsCheck::default().check(&doc(json!({"paths": {}})));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::Issue);
    }

    #[test]
    fn test_paths_without_operations() {
        let findings = PathsCheck::default().check(&doc(json!({"paths": {"/x": {}}})));
        assert_eq!(findings[0].message, "No HTTP operations defined");
        assert_eq!(findings[0].kind, FindingKind::Issue);
        // Coverage is 0 on both axes
        assert_eq!(findings.len(), 3);
        assert!(findings[1].message.contains("0%"));
        assert!(findings[2].message.contains("0%"));
    }

    #[test]
    fn test_ninety_percent_described_has_no_description_suggestion() {
        let d = synthetic(10, 9, 10);
        let metrics = coverage(&d);
        assert_eq!(metrics.total_operations, 10);
        assert!((metrics.description_coverage - 90.0).abs() < 1e-9);
        assert!(PathsCheck::default().check(&d).is_empty());
    }

    #[test]
    fn test_coverage_at_threshold_is_enough() {
        // 4 of 5 described is exactly 80%
        let d = synthetic(5, 4, 5);
        assert!((coverage(&d).description_coverage - 80.0).abs() < 1e-9);
        assert!(PathsCheck::default().check(&d).is_empty());

        // 2 of 4 with examples is exactly 50%
        let d = synthetic(4, 4, 2);
        assert!((coverage(&d).example_coverage - 50.0).abs() < 1e-9);
        assert!(PathsCheck::default().check(&d).is_empty());
    }

    #[test]
    fn test_coverage_just_below_threshold() {
        let findings = PathsCheck::default().check(&synthetic(7, 5, 3));
        let messages: Vec<_> = findings.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Only 71% of operations have a summary or description",
                "Only 43% of operations have response examples",
            ]
        );
    }

    #[test]
    fn test_low_coverage_reports_rounded_percentage() {
        let d = synthetic(3, 2, 1);
        let findings = PathsCheck::default().check(&d);
        let messages: Vec<_> = findings.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Only 67% of operations have a summary or description",
                "Only 33% of operations have response examples",
            ]
        );
    }

    #[test]
    fn test_example_counted_once_per_operation() {
        let d = doc(json!({
            "paths": {"/x": {"get": {
                "summary": "s",
                "responses": {
                    "200": {"content": {"application/json": {"examples": {"a": {}}}}},
                    "201": {"content": {"application/json": {"schema": {"example": 1}}}}
                }
            }}}
        }));
        let metrics = coverage(&d);
        assert_eq!(metrics.exampled_operations, 1);
        assert_eq!(metrics.example_coverage, 100.0);
        assert_eq!(metrics.total_responses, 2);
    }

    #[test]
    fn test_custom_thresholds() {
        let d = synthetic(4, 3, 1);
        let lenient = PathsCheck::new(ThresholdConfig {
            description_coverage: 50.0,
            example_coverage: 20.0,
        });
        assert!(lenient.check(&d).is_empty());
        assert_eq!(PathsCheck::default().check(&d).len(), 2);
    }
}
