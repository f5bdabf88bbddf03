//! Reading specification documents from disk
//!
//! JSON and YAML are both accepted. YAML is routed through a JSON value so
//! unquoted status codes (`200:`) end up as string keys like they would in
//! a JSON document.

use super::Document;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors produced while loading a document
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid JSON", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} is not valid YAML", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{} is not a specification document: {reason}", path.display())]
    Shape { path: PathBuf, reason: String },
}

/// Source syntax of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// Guess the format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(SourceFormat::Json),
            "yaml" | "yml" => Some(SourceFormat::Yaml),
            _ => None,
        }
    }
}

/// Read and parse a document from `path`
pub fn load_document(path: &Path) -> Result<Document, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", content.len(), path.display());
    parse_document(&content, SourceFormat::from_path(path), path)
}

/// Parse document text.
///
/// With no explicit format, JSON is tried first and YAML second; the JSON
/// error is reported when both fail and the text looks like JSON.
pub fn parse_document(
    content: &str,
    format: Option<SourceFormat>,
    path: &Path,
) -> Result<Document, LoadError> {
    let value = match format {
        Some(SourceFormat::Json) => parse_json(content, path)?,
        Some(SourceFormat::Yaml) => parse_yaml(content, path)?,
        None => match parse_json(content, path) {
            Ok(value) => value,
            Err(json_err) => {
                let trimmed = content.trim_start();
                if trimmed.starts_with('{') || trimmed.starts_with('[') {
                    return Err(json_err);
                }
                debug!("{} is not JSON, trying YAML", path.display());
                parse_yaml(content, path)?
            }
        },
    };

    if !value.is_object() {
        return Err(LoadError::Shape {
            path: path.to_path_buf(),
            reason: "document root must be a mapping".to_string(),
        });
    }

    serde_json::from_value(value).map_err(|e| LoadError::Shape {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn parse_json(content: &str, path: &Path) -> Result<Value, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_yaml(content: &str, path: &Path) -> Result<Value, LoadError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content).map_err(|source| {
        LoadError::Yaml {
            path: path.to_path_buf(),
            source,
        }
    })?;
    serde_json::to_value(yaml).map_err(|e| LoadError::Shape {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Method;

    fn p() -> &'static Path {
        Path::new("spec")
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SourceFormat::from_path(Path::new("a.json")), Some(SourceFormat::Json));
        assert_eq!(SourceFormat::from_path(Path::new("a.YAML")), Some(SourceFormat::Yaml));
        assert_eq!(SourceFormat::from_path(Path::new("a.yml")), Some(SourceFormat::Yaml));
        assert_eq!(SourceFormat::from_path(Path::new("openapi")), None);
    }

    #[test]
    fn test_yaml_integer_status_codes() {
        let yaml = r#"
openapi: 3.0.0
info:
  title: Pets
  version: "1.0"
paths:
  /pets:
    get:
      summary: List pets
      responses:
        200:
          description: ok
"#;
        let doc = parse_document(yaml, Some(SourceFormat::Yaml), p()).unwrap();
        let (_, method, op) = doc.operations().next().unwrap();
        assert_eq!(method, Method::Get);
        let codes: Vec<_> = op.responses().map(|(code, _)| code.to_string()).collect();
        assert_eq!(codes, vec!["200"]);
    }

    #[test]
    fn test_unquoted_numeric_version() {
        let yaml = "info:\n  title: Pets\n  version: 1.0\npaths: {}\n";
        let doc = parse_document(yaml, Some(SourceFormat::Yaml), p()).unwrap();
        assert_eq!(doc.info.unwrap().version.as_deref(), Some("1.0"));

        let json = r#"{"info": {"title": "A", "version": 1}, "paths": {}}"#;
        let doc = parse_document(json, Some(SourceFormat::Json), p()).unwrap();
        assert_eq!(doc.info.unwrap().version.as_deref(), Some("1"));
    }

    #[test]
    fn test_sniffs_yaml_without_extension() {
        let doc = parse_document("info:\n  title: A\n", None, p()).unwrap();
        assert_eq!(doc.info.unwrap().title.as_deref(), Some("A"));
    }

    #[test]
    fn test_invalid_json_is_reported_as_json() {
        let err = parse_document("{\"info\": ", None, p()).unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
    }

    #[test]
    fn test_non_mapping_root_is_shape_error() {
        let err = parse_document("[1, 2]", Some(SourceFormat::Json), p()).unwrap_err();
        assert!(matches!(err, LoadError::Shape { .. }));
        assert!(err.to_string().contains("mapping"));
    }

    #[test]
    fn test_wrong_field_type_is_shape_error() {
        let err =
            parse_document(r#"{"servers": "http://x"}"#, Some(SourceFormat::Json), p()).unwrap_err();
        assert!(matches!(err, LoadError::Shape { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_document(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
