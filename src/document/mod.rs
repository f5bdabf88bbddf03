//! Specification document model
//!
//! A typed view of an OpenAPI-style document. Every field is optional:
//! incomplete documents are expected input and are reported as findings,
//! never as parse errors. Only a structurally wrong shape (e.g. `paths`
//! being a string) fails to deserialize.
//!
//! Maps are `BTreeMap`s so that iteration, and therefore finding order,
//! is deterministic for a given document.

mod loader;

pub use loader::{load_document, parse_document, LoadError, SourceFormat};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// True when a text field is present and non-empty
pub(crate) fn has_text(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.is_empty())
}

/// Accept any scalar where text is expected.
///
/// Unquoted YAML such as `version: 1.0` arrives as a number; it is kept in
/// its string form. `null` and `false` read as absent, and mappings or
/// sequences are kept as their JSON text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    })
}

/// Root of a specification document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub info: Option<Info>,
    pub servers: Option<Vec<Server>>,
    pub tags: Option<Vec<Tag>>,
    pub external_docs: Option<ExternalDocs>,
    pub paths: Option<BTreeMap<String, PathItem>>,
    pub components: Option<Components>,
}

impl Document {
    /// All recognized operations as `(path, method, operation)` triples.
    ///
    /// Paths are visited in key order, methods in `Method::ALL` order.
    pub fn operations(&self) -> impl Iterator<Item = (&str, Method, &Operation)> {
        self.paths.iter().flatten().flat_map(|(path, item)| {
            item.operations()
                .map(move |(method, op)| (path.as_str(), method, op))
        })
    }

    pub fn has_servers(&self) -> bool {
        self.servers.as_ref().is_some_and(|s| !s.is_empty())
    }

    pub fn has_tags(&self) -> bool {
        self.tags.as_ref().is_some_and(|t| !t.is_empty())
    }

    pub fn has_paths(&self) -> bool {
        self.paths.as_ref().is_some_and(|p| !p.is_empty())
    }

    pub fn schemas(&self) -> Option<&BTreeMap<String, Schema>> {
        self.components.as_ref()?.schemas.as_ref()
    }

    pub fn security_schemes(&self) -> Option<&BTreeMap<String, SecurityScheme>> {
        self.components.as_ref()?.security_schemes.as_ref()
    }

    /// `info.description`, if present and non-empty
    pub fn description(&self) -> Option<&str> {
        self.info
            .as_ref()
            .and_then(|i| i.description.as_deref())
            .filter(|d| !d.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Info {
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub version: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    #[serde(deserialize_with = "lenient_text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalDocs {
    #[serde(deserialize_with = "lenient_text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Components {
    pub schemas: Option<BTreeMap<String, Schema>>,
    pub security_schemes: Option<BTreeMap<String, SecurityScheme>>,
}

/// The HTTP verbs recognized as operations on a path item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
    Connect,
}

impl Method {
    pub const ALL: [Method; 9] = [
        Method::Get,
        Method::Put,
        Method::Post,
        Method::Delete,
        Method::Options,
        Method::Head,
        Method::Patch,
        Method::Trace,
        Method::Connect,
    ];
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Head => "HEAD",
            Method::Patch => "PATCH",
            Method::Trace => "TRACE",
            Method::Connect => "CONNECT",
        };
        write!(f, "{name}")
    }
}

/// Operations bound to one path.
///
/// Keys other than the recognized verbs (`parameters`, `summary`,
/// `x-*` extensions, ...) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathItem {
    pub get: Option<Operation>,
    pub put: Option<Operation>,
    pub post: Option<Operation>,
    pub delete: Option<Operation>,
    pub options: Option<Operation>,
    pub head: Option<Operation>,
    pub patch: Option<Operation>,
    pub trace: Option<Operation>,
    pub connect: Option<Operation>,
}

impl PathItem {
    pub fn operation(&self, method: Method) -> Option<&Operation> {
        match method {
            Method::Get => self.get.as_ref(),
            Method::Put => self.put.as_ref(),
            Method::Post => self.post.as_ref(),
            Method::Delete => self.delete.as_ref(),
            Method::Options => self.options.as_ref(),
            Method::Head => self.head.as_ref(),
            Method::Patch => self.patch.as_ref(),
            Method::Trace => self.trace.as_ref(),
            Method::Connect => self.connect.as_ref(),
        }
    }

    pub fn operations(&self) -> impl Iterator<Item = (Method, &Operation)> {
        Method::ALL
            .into_iter()
            .filter_map(move |m| self.operation(m).map(|op| (m, op)))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Operation {
    #[serde(deserialize_with = "lenient_text")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
    pub parameters: Option<Vec<Parameter>>,
    pub request_body: Option<Value>,
    pub responses: Option<BTreeMap<String, Response>>,
}

impl Operation {
    /// Has a non-empty summary or description
    pub fn is_described(&self) -> bool {
        has_text(&self.summary) || has_text(&self.description)
    }

    /// At least one response carries an example in any of its media types
    pub fn has_response_example(&self) -> bool {
        self.responses()
            .any(|(_, response)| response.has_example())
    }

    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().flatten()
    }

    pub fn responses(&self) -> impl Iterator<Item = (&str, &Response)> {
        self.responses
            .iter()
            .flatten()
            .map(|(code, r)| (code.as_str(), r))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameter {
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(rename = "in", deserialize_with = "lenient_text")]
    pub location: Option<String>,
    pub required: Option<bool>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
    pub example: Option<Value>,
    pub schema: Option<Schema>,
}

impl Parameter {
    /// `example` or `schema.example` is set
    pub fn has_example(&self) -> bool {
        self.example.is_some()
            || self.schema.as_ref().is_some_and(|s| s.example.is_some())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Response {
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
    pub content: Option<BTreeMap<String, MediaType>>,
}

impl Response {
    pub fn has_example(&self) -> bool {
        self.content
            .iter()
            .flatten()
            .any(|(_, media)| media.has_example())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaType {
    pub schema: Option<Schema>,
    /// Any non-null value counts; only its presence is checked
    pub examples: Option<Value>,
}

impl MediaType {
    /// `examples` or `schema.example` is set
    pub fn has_example(&self) -> bool {
        self.examples.is_some()
            || self.schema.as_ref().is_some_and(|s| s.example.is_some())
    }
}

/// A schema object; only the fields the checks look at are modelled
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
    pub example: Option<Value>,
    pub properties: Option<BTreeMap<String, Schema>>,
}

impl Schema {
    /// A top-level `example`, or any direct property with one
    pub fn has_example(&self) -> bool {
        self.example.is_some()
            || self
                .properties
                .iter()
                .flatten()
                .any(|(_, prop)| prop.example.is_some())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityScheme {
    #[serde(rename = "type", deserialize_with = "lenient_text")]
    pub scheme_type: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
}
