//! Info object check
//!
//! `info`, `info.title` and `info.version` are required; a missing
//! `info.description` is only a suggestion.

use super::base::Check;
use crate::document::{has_text, Document};
use crate::models::{Category, Finding};

pub struct InfoCheck;

impl Check for InfoCheck {
    fn name(&self) -> &'static str {
        "InfoCheck"
    }

    fn description(&self) -> &'static str {
        "Checks the info object for title, version and description"
    }

    fn category(&self) -> Category {
        Category::Info
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let Some(info) = &doc.info else {
            return vec![self.issue("Missing info object".to_string())];
        };

        let mut findings = Vec::new();
        if !has_text(&info.title) {
            findings.push(self.issue("Missing API title (info.title)".to_string()));
        }
        if !has_text(&info.version) {
            findings.push(self.issue("Missing API version (info.version)".to_string()));
        }
        if !has_text(&info.description) {
            findings.push(self.suggestion(
                "Add an API description (info.description) explaining what the API does"
                    .to_string(),
            ));
        }
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FindingKind;
    use serde_json::json;

    fn run(value: serde_json::Value) -> Vec<Finding> {
        InfoCheck.check(&serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_missing_info_is_single_issue() {
        let findings = run(json!({}));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::Issue);
        assert!(findings[0].message.contains("info"));
    }

    #[test]
    fn test_empty_info() {
        let findings = run(json!({"info": {}}));
        let kinds: Vec<_> = findings.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![FindingKind::Issue, FindingKind::Issue, FindingKind::Suggestion]
        );
        assert!(findings[0].message.contains("title"));
        assert!(findings[1].message.contains("version"));
    }

    #[test]
    fn test_complete_info() {
        let findings = run(json!({
            "info": {"title": "Pets", "version": "1.0", "description": "All about pets"}
        }));
        assert!(findings.is_empty());
    }

    #[test]
    fn test_empty_title_counts_as_missing() {
        let findings = run(json!({"info": {"title": "", "version": "1", "description": "d"}}));
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("title"));
    }
}
