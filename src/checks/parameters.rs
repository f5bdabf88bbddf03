//! Operation parameter check

use super::base::{plural, Check};
use crate::document::{has_text, Document};
use crate::models::{Category, Finding};

pub struct ParametersCheck;

impl Check for ParametersCheck {
    fn name(&self) -> &'static str {
        "ParametersCheck"
    }

    fn description(&self) -> &'static str {
        "Counts operation parameters without descriptions or examples"
    }

    fn category(&self) -> Category {
        Category::Parameters
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        let mut undescribed = 0;
        let mut without_example = 0;
        for (_, _, op) in doc.operations() {
            for param in op.parameters() {
                if !has_text(&param.description) {
                    undescribed += 1;
                }
                if !param.has_example() {
                    without_example += 1;
                }
            }
        }

        let mut findings = Vec::new();
        if undescribed > 0 {
            findings.push(self.suggestion(format!(
                "{} missing descriptions",
                plural(undescribed, "parameter")
            )));
        }
        if without_example > 0 {
            findings.push(self.suggestion(format!(
                "{} missing examples",
                plural(without_example, "parameter")
            )));
        }
        findings
    }
}
