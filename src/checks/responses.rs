//! Operation response check
//!
//! The `default` response is exempt from the content requirement.

use super::base::{plural, Check};
use crate::document::{has_text, Document};
use crate::models::{Category, Finding};

const DEFAULT_RESPONSE: &str = "default";

pub struct ResponsesCheck;

impl Check for ResponsesCheck {
    fn name(&self) -> &'static str {
        "ResponsesCheck"
    }

    fn description(&self) -> &'static str {
        "Counts responses without descriptions or content"
    }

    fn category(&self) -> Category {
        Category::Responses
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let mut undescribed = 0;
        let mut without_content = 0;
        for (_, _, op) in doc.operations() {
            for (code, response) in op.responses() {
                if !has_text(&response.description) {
                    undescribed += 1;
                }
                if code != DEFAULT_RESPONSE && response.content.is_none() {
                    without_content += 1;
                }
            }
        }

        let mut findings = Vec::new();
        if undescribed > 0 {
            findings.push(self.suggestion(format!(
                "{} missing descriptions",
                plural(undescribed, "response")
            )));
        }
        if without_content > 0 {
            findings.push(self.suggestion(format!(
                "{} missing content definitions",
                plural(without_content, "response")
            )));
        }
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_response_exempt_from_content() {
        let doc: Document = serde_json::from_value(json!({
            "paths": {"/x": {"get": {"responses": {
                "200": {"description": "ok", "content": {"application/json": {}}},
                "204": {"description": "empty"},
                "default": {}
            }}}}
        }))
        .unwrap();
        let findings = ResponsesCheck.check(&doc);
        let messages: Vec<_> = findings.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["1 response missing descriptions", "1 response missing content definitions"]
        );
    }

    #[test]
    fn test_fully_documented() {
        let doc: Document = serde_json::from_value(json!({
            "paths": {"/x": {"get": {"responses": {
                "200": {"description": "ok", "content": {"text/plain": {}}}
            }}}}
        }))
        .unwrap();
        assert!(ResponsesCheck.check(&doc).is_empty());
    }
}
