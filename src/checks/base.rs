//! Base check trait
//!
//! Every evaluation step implements `Check`. Checks are pure: they read
//! the document and return findings in the order they were detected.

use crate::document::Document;
use crate::models::{Category, Finding};

/// Trait for all document checks
///
/// # Example Implementation
///
/// ```ignore
/// pub struct MyCheck;
///
/// impl Check for MyCheck {
///     fn name(&self) -> &'static str {
///         "MyCheck"
///     }
///
///     fn description(&self) -> &'static str {
///         "Checks one specific part of the document"
///     }
///
///     fn category(&self) -> Category {
///         Category::Info
///     }
///
///     fn check(&self, doc: &Document) -> Vec<Finding> {
///         vec![]
///     }
/// }
/// ```
pub trait Check: Send + Sync {
    /// Unique identifier for this check
    fn name(&self) -> &'static str;

    /// Human-readable description of what this check looks for
    fn description(&self) -> &'static str;

    /// Category attached to every finding this check produces
    fn category(&self) -> Category;

    /// Run the check and return findings in detection order
    fn check(&self, doc: &Document) -> Vec<Finding>;

    /// Issue helper tagged with this check's category
    fn issue(&self, message: String) -> Finding {
        Finding::issue(self.category(), message)
    }

    /// Suggestion helper tagged with this check's category
    fn suggestion(&self, message: String) -> Finding {
        Finding::suggestion(self.category(), message)
    }
}

/// `"1 schema"` / `"3 schemas"`
pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Round a percentage for messages, halves away from zero
pub(crate) fn rounded_percent(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "schema"), "1 schema");
        assert_eq!(plural(0, "schema"), "0 schemas");
        assert_eq!(plural(4, "parameter"), "4 parameters");
    }

    #[test]
    fn test_rounded_percent() {
        assert_eq!(rounded_percent(66.666), 67);
        assert_eq!(rounded_percent(12.5), 13);
        assert_eq!(rounded_percent(0.0), 0);
    }
}
