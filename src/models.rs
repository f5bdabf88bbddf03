//! Core data models for specscore
//!
//! These models are shared by the checks, the scorer and the reporters
//! for representing findings and evaluation results.

use crate::scoring::ScoreBreakdown;
use serde::{Deserialize, Serialize};

/// Whether a finding is a hard gap or a soft improvement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    /// A required element is missing
    Issue,
    /// An optional element would improve the document
    Suggestion,
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingKind::Issue => write!(f, "issue"),
            FindingKind::Suggestion => write!(f, "suggestion"),
        }
    }
}

/// Area of the document a finding was raised against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Info,
    Servers,
    Paths,
    Schemas,
    SecuritySchemes,
    Documentation,
    Parameters,
    Responses,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Info => write!(f, "info"),
            Category::Servers => write!(f, "servers"),
            Category::Paths => write!(f, "paths"),
            Category::Schemas => write!(f, "schemas"),
            Category::SecuritySchemes => write!(f, "security-schemes"),
            Category::Documentation => write!(f, "documentation"),
            Category::Parameters => write!(f, "parameters"),
            Category::Responses => write!(f, "responses"),
        }
    }
}

/// A single gap detected in a specification document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub category: Category,
    pub message: String,
}

impl Finding {
    pub fn issue(category: Category, message: impl Into<String>) -> Self {
        Self {
            kind: FindingKind::Issue,
            category,
            message: message.into(),
        }
    }

    pub fn suggestion(category: Category, message: impl Into<String>) -> Self {
        Self {
            kind: FindingKind::Suggestion,
            category,
            message: message.into(),
        }
    }

    pub fn is_issue(&self) -> bool {
        self.kind == FindingKind::Issue
    }
}

/// Qualitative banner derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Grade {
    /// Calculate grade from score using the given cutoffs
    pub fn from_score(score: u8, cutoffs: &crate::config::GradeCutoffs) -> Self {
        match score {
            s if s >= cutoffs.excellent => Grade::Excellent,
            s if s >= cutoffs.good => Grade::Good,
            s if s >= cutoffs.fair => Grade::Fair,
            _ => Grade::Poor,
        }
    }

    /// One-line banner shown under the score
    pub fn banner(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent! Your API specification is comprehensive.",
            Grade::Good => "Good specification with room for improvement.",
            Grade::Fair => "Fair specification, consider addressing the suggestions.",
            Grade::Poor => "Poor specification, significant improvements needed.",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::Excellent => write!(f, "excellent"),
            Grade::Good => write!(f, "good"),
            Grade::Fair => write!(f, "fair"),
            Grade::Poor => write!(f, "poor"),
        }
    }
}

/// Documentation coverage counts gathered while walking the document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageMetrics {
    pub total_operations: usize,
    /// Operations with a summary or description
    pub described_operations: usize,
    /// Operations with at least one response example
    pub exampled_operations: usize,
    /// Percentage of described operations (0 when there are none)
    pub description_coverage: f64,
    /// Percentage of operations with response examples (0 when there are none)
    pub example_coverage: f64,
    pub total_schemas: usize,
    pub total_parameters: usize,
    pub total_responses: usize,
}

/// Result of evaluating one specification document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub score: u8,
    pub grade: Grade,
    pub issues: Vec<Finding>,
    pub suggestions: Vec<Finding>,
    pub metrics: CoverageMetrics,
    pub breakdown: ScoreBreakdown,
}

impl Report {
    /// Total number of findings of either kind
    pub fn finding_count(&self) -> usize {
        self.issues.len() + self.suggestions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GradeCutoffs;

    #[test]
    fn test_grade_cutoffs() {
        let cutoffs = GradeCutoffs::default();
        assert_eq!(Grade::from_score(100, &cutoffs), Grade::Excellent);
        assert_eq!(Grade::from_score(90, &cutoffs), Grade::Excellent);
        assert_eq!(Grade::from_score(89, &cutoffs), Grade::Good);
        assert_eq!(Grade::from_score(70, &cutoffs), Grade::Good);
        assert_eq!(Grade::from_score(50, &cutoffs), Grade::Fair);
        assert_eq!(Grade::from_score(49, &cutoffs), Grade::Poor);
        assert_eq!(Grade::from_score(0, &cutoffs), Grade::Poor);
    }

    #[test]
    fn test_finding_constructors() {
        let issue = Finding::issue(Category::Info, "Missing info object");
        assert!(issue.is_issue());
        assert_eq!(issue.kind.to_string(), "issue");

        let suggestion = Finding::suggestion(Category::Servers, "Add servers");
        assert!(!suggestion.is_issue());
        assert_eq!(suggestion.category.to_string(), "servers");
    }

    #[test]
    fn test_category_serializes_kebab_case() {
        let json = serde_json::to_string(&Category::SecuritySchemes).unwrap();
        assert_eq!(json, "\"security-schemes\"");
    }
}
