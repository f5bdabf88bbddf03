//! Security scheme check

use super::base::Check;
use crate::document::{has_text, Document};
use crate::models::{Category, Finding};

pub struct SecuritySchemesCheck;

impl Check for SecuritySchemesCheck {
    fn name(&self) -> &'static str {
        "SecuritySchemesCheck"
    }

    fn description(&self) -> &'static str {
        "Flags security schemes without a description"
    }

    fn category(&self) -> Category {
        Category::SecuritySchemes
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        doc.security_schemes()
            .into_iter()
            .flatten()
            .filter(|(_, scheme)| !has_text(&scheme.description))
            .map(|(name, _)| {
                self.suggestion(format!("Security scheme '{name}' is missing a description"))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_one_suggestion_per_undescribed_scheme() {
        let doc: Document = serde_json::from_value(json!({
            "components": {"securitySchemes": {
                "apiKey": {"type": "apiKey"},
                "bearer": {"type": "http", "description": "JWT bearer token"},
                "oauth": {"type": "oauth2"}
            }}
        }))
        .unwrap();
        let findings = SecuritySchemesCheck.check(&doc);
        let messages: Vec<_> = findings.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Security scheme 'apiKey' is missing a description",
                "Security scheme 'oauth' is missing a description",
            ]
        );
    }

    #[test]
    fn test_absent_schemes() {
        let doc: Document = serde_json::from_value(json!({"components": {}})).unwrap();
        assert!(SecuritySchemesCheck.check(&doc).is_empty());
    }
}
