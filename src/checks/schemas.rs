//! Component schema check

use super::base::{plural, Check};
use crate::document::{has_text, Document};
use crate::models::{Category, Finding};

pub struct SchemasCheck;

impl Check for SchemasCheck {
    fn name(&self) -> &'static str {
        "SchemasCheck"
    }

    fn description(&self) -> &'static str {
        "Counts component schemas without descriptions or examples"
    }

    fn category(&self) -> Category {
        Category::Schemas
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let Some(schemas) = doc.schemas() else {
            return Vec::new();
        };

        let undescribed = schemas
            .values()
            .filter(|s| !has_text(&s.description))
            .count();
        let without_example = schemas.values().filter(|s| !s.has_example()).count();

        let mut findings = Vec::new();
        if undescribed > 0 {
            findings.push(self.suggestion(format!(
                "{} missing descriptions",
                plural(undescribed, "schema")
            )));
        }
        if without_example > 0 {
            findings.push(self.suggestion(format!(
                "{} missing examples",
                plural(without_example, "schema")
            )));
        }
        findings
    }
}
