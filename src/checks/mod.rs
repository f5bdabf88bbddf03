//! Document checks
//!
//! Each step of an evaluation is a `Check`. The `CheckEngine` runs them in
//! a fixed order and assembles the `Report`:
//!
//! ```text
//! Info → Servers → Paths → Schemas → SecuritySchemes
//!      → Documentation → Parameters → Responses → Scorer
//! ```
//!
//! Findings keep detection order; they are never sorted.

mod base;
mod docs;
mod info;
mod parameters;
mod paths;
mod responses;
mod schemas;
mod security;
mod servers;

pub use base::Check;
pub use docs::DocumentationCheck;
pub use info::InfoCheck;
pub use parameters::ParametersCheck;
pub use paths::{coverage, PathsCheck};
pub use responses::ResponsesCheck;
pub use schemas::SchemasCheck;
pub use security::SecuritySchemesCheck;
pub use servers::ServersCheck;

use crate::config::ProjectConfig;
use crate::document::Document;
use crate::models::{Finding, Grade, Report};
use crate::scoring::Scorer;
use tracing::{debug, trace};

/// Create the default check list in evaluation order
pub fn default_checks(config: &ProjectConfig) -> Vec<Box<dyn Check>> {
    vec![
        Box::new(InfoCheck),
        Box::new(ServersCheck),
        Box::new(PathsCheck::new(config.thresholds)),
        Box::new(SchemasCheck),
        Box::new(SecuritySchemesCheck),
        Box::new(DocumentationCheck),
        Box::new(ParametersCheck),
        Box::new(ResponsesCheck),
    ]
}

/// Runs checks over a document and scores the result
pub struct CheckEngine {
    checks: Vec<Box<dyn Check>>,
    config: ProjectConfig,
}

impl CheckEngine {
    pub fn new(config: ProjectConfig) -> Self {
        Self {
            checks: default_checks(&config),
            config,
        }
    }

    /// Register an extra check, run after the built-in ones
    pub fn register(&mut self, check: Box<dyn Check>) {
        debug!("Registering check: {} ({})", check.name(), check.description());
        self.checks.push(check);
    }

    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// Run all checks, returning findings in detection order
    pub fn run(&self, doc: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();
        for check in &self.checks {
            trace!("Running {}: {}", check.name(), check.description());
            let found = check.check(doc);
            debug!("{}: {} findings", check.name(), found.len());
            findings.extend(found);
        }
        findings
    }

    /// Evaluate a document into a scored report
    pub fn evaluate(&self, doc: &Document) -> Report {
        let (issues, suggestions): (Vec<_>, Vec<_>) =
            self.run(doc).into_iter().partition(Finding::is_issue);

        let breakdown =
            Scorer::new(&self.config.scoring).calculate(doc, issues.len(), suggestions.len());
        let score = breakdown.score;

        Report {
            score,
            grade: Grade::from_score(score, &self.config.grades),
            issues,
            suggestions,
            metrics: coverage(doc),
            breakdown,
        }
    }
}

impl Default for CheckEngine {
    fn default() -> Self {
        Self::new(ProjectConfig::default())
    }
}

/// Evaluate a document with default settings
pub fn evaluate(doc: &Document) -> Report {
    CheckEngine::default().evaluate(doc)
}

/// Evaluate a document with the given configuration
pub fn evaluate_with_config(doc: &Document, config: &ProjectConfig) -> Report {
    CheckEngine::new(config.clone()).evaluate(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, FindingKind};
    use serde_json::json;

    struct AlwaysCheck;

    impl Check for AlwaysCheck {
        fn name(&self) -> &'static str {
            "AlwaysCheck"
        }

        fn description(&self) -> &'static str {
            "Always raises one issue"
        }

        fn category(&self) -> Category {
            Category::Info
        }

        fn check(&self, _doc: &Document) -> Vec<Finding> {
            vec![self.issue("always".to_string())]
        }
    }

    #[test]
    fn test_check_order() {
        let engine = CheckEngine::default();
        assert_eq!(
            engine.check_names(),
            vec![
                "InfoCheck",
                "ServersCheck",
                "PathsCheck",
                "SchemasCheck",
                "SecuritySchemesCheck",
                "DocumentationCheck",
                "ParametersCheck",
                "ResponsesCheck",
            ]
        );
    }

    #[test]
    fn test_every_check_is_described() {
        for check in default_checks(&ProjectConfig::default()) {
            assert!(!check.description().is_empty(), "{}", check.name());
        }
    }

    #[test]
    fn test_findings_keep_detection_order() {
        let doc: Document = serde_json::from_value(json!({})).unwrap();
        let findings = CheckEngine::default().run(&doc);
        let categories: Vec<_> = findings.iter().map(|f| f.category).collect();
        assert_eq!(
            categories,
            vec![
                Category::Info,
                Category::Servers,
                Category::Paths,
                Category::Documentation,
                Category::Documentation,
            ]
        );
    }

    #[test]
    fn test_report_partitions_by_kind() {
        let doc: Document = serde_json::from_value(json!({})).unwrap();
        let report = evaluate(&doc);
        assert!(report.issues.iter().all(|f| f.kind == FindingKind::Issue));
        assert!(report
            .suggestions
            .iter()
            .all(|f| f.kind == FindingKind::Suggestion));
        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.suggestions.len(), 3);
        assert_eq!(report.score, 87);
    }

    #[test]
    fn test_registered_check_affects_score() {
        let doc: Document = serde_json::from_value(json!({})).unwrap();
        let mut engine = CheckEngine::default();
        engine.register(Box::new(AlwaysCheck));
        let report = engine.evaluate(&doc);
        assert_eq!(report.issues.len(), 3);
        assert_eq!(report.issues[2].message, "always");
        assert_eq!(report.score, 82);
    }
}
