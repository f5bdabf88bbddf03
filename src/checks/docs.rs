//! Tags and external documentation check

use super::base::Check;
use crate::document::Document;
use crate::models::{Category, Finding};

pub struct DocumentationCheck;

impl Check for DocumentationCheck {
    fn name(&self) -> &'static str {
        "DocumentationCheck"
    }

    fn description(&self) -> &'static str {
        "Checks for operation tags and external documentation"
    }

    fn category(&self) -> Category {
        Category::Documentation
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let mut findings = Vec::new();
        if !doc.has_tags() {
            findings.push(self.suggestion("Add tags to organize operations".to_string()));
        }
        if doc.external_docs.is_none() {
            findings.push(
                self.suggestion("Add externalDocs linking to further documentation".to_string()),
            );
        }
        findings
    }
}
