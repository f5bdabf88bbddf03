//! specscore - completeness scoring for API specification documents
//!
//! Reads an OpenAPI-style document, runs a fixed sequence of checks that
//! produce issues (missing required elements) and suggestions (documentation
//! gaps), and derives a 0-100 score from them.
//!
//! ```no_run
//! use specscore::document::load_document;
//!
//! let doc = load_document(std::path::Path::new("openapi.yaml"))?;
//! let report = specscore::evaluate(&doc);
//! println!("{} ({})", report.score, report.grade);
//! # Ok::<(), specscore::document::LoadError>(())
//! ```

pub mod checks;
pub mod config;
pub mod document;
pub mod models;
pub mod reporters;
pub mod scoring;

pub use checks::{evaluate, evaluate_with_config};
