//! Inbound request model consumed by the event builder.

use serde_json::Value;
use std::collections::HashMap;

pub const CONTENT_TYPE: &str = "content-type";

/// A request already parsed by the HTTP layer.
///
/// Header names are lowercase. `body` is the parsed JSON body; an empty
/// request body is represented as an empty object.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub query: HashMap<String, String>,
    pub body: Value,
}

impl GatewayRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            headers: HashMap::new(),
            query: HashMap::new(),
            body: Value::Object(Default::default()),
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).map(String::as_str)
    }
}

/// The route a request was matched to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRoute {
    /// Template path, placeholders not substituted.
    pub path: String,
}

impl MatchedRoute {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}
