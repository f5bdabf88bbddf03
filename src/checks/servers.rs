//! Servers check

use super::base::Check;
use crate::document::Document;
use crate::models::{Category, Finding};

pub struct ServersCheck;

impl Check for ServersCheck {
    fn name(&self) -> &'static str {
        "ServersCheck"
    }

    fn description(&self) -> &'static str {
        "Checks that at least one server is declared"
    }

    fn category(&self) -> Category {
        Category::Servers
    }

    fn check(&self, doc: &Document) -> Vec<Finding> {
        if doc.has_servers() {
            return Vec::new();
        }
        vec![self.suggestion(
            "Add servers to document where the API is hosted".to_string(),
        )]
    }
}
