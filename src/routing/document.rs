//! Routing document (OpenAPI) loading and operation discovery.
//!
//! # Responsibilities
//! - Load the routing document from disk
//! - Enumerate declared operations (path × method) in declaration order
//! - Collect the `operationId` of every declared operation
//!
//! # Design Decisions
//! - Declaration order is preserved (`serde_json` with `preserve_order`)
//! - A document without a `paths` object, or a path entry that is not an
//!   object, is rejected up front
//! - Non-object members of a path item (`summary`, `parameters`, ...) are not
//!   operations and are skipped
//! - Operations without an `operationId` are skipped silently

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or walking a routing document.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("failed to read routing document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("routing document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("routing document has no `paths` object")]
    MissingPaths,

    #[error("path entry `{0}` is not an object")]
    MalformedPathItem(String),

    #[error("unsupported route template `{template}`: {reason}")]
    UnsupportedTemplate { template: String, reason: &'static str },

    #[error("route `{0}` is reserved by the gateway")]
    ReservedPath(String),

    #[error("{method} {route} is declared more than once")]
    DuplicateRoute { route: String, method: String },

    #[error("route templates `{first}` and `{second}` overlap")]
    ConflictingTemplates { first: String, second: String },
}

/// One operation declared under `paths`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredOperation {
    /// Route template, e.g. `/widgets/{id}`.
    pub path: String,
    /// Method key as written in the document (usually lowercase).
    pub method: String,
    /// The `operationId`, when present.
    pub operation_id: Option<String>,
}

/// A parsed routing document.
#[derive(Debug, Clone)]
pub struct RoutingDocument {
    raw: Value,
}

impl RoutingDocument {
    /// Wrap an already-parsed document.
    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    /// Read and parse a document from disk.
    pub fn load(path: &Path) -> Result<Self, RoutingError> {
        let content = fs::read_to_string(path).map_err(|source| RoutingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: Value = serde_json::from_str(&content)?;
        Ok(Self { raw })
    }

    pub fn as_value(&self) -> &Value {
        &self.raw
    }

    /// `info.title`, if declared.
    pub fn title(&self) -> Option<&str> {
        self.raw.pointer("/info/title").and_then(Value::as_str)
    }

    /// Every operation under `paths`, in declaration order.
    pub fn operations(&self) -> Result<Vec<DeclaredOperation>, RoutingError> {
        let paths = self
            .raw
            .get("paths")
            .and_then(Value::as_object)
            .ok_or(RoutingError::MissingPaths)?;

        let mut operations = Vec::new();
        for (path, item) in paths {
            let item = item
                .as_object()
                .ok_or_else(|| RoutingError::MalformedPathItem(path.clone()))?;

            for (method, operation) in item {
                let Some(operation) = operation.as_object() else {
                    continue;
                };
                operations.push(DeclaredOperation {
                    path: path.clone(),
                    method: method.clone(),
                    operation_id: operation
                        .get("operationId")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                });
            }
        }
        Ok(operations)
    }

    /// Copy of the document with `url` prepended to `servers`, so that docs
    /// tooling can call the local gateway.
    pub fn with_local_server(&self, url: &str) -> Value {
        let mut doc = self.raw.clone();
        if let Some(root) = doc.as_object_mut() {
            let servers = root
                .entry("servers")
                .or_insert_with(|| Value::Array(Vec::new()));
            if !servers.is_array() {
                *servers = Value::Array(Vec::new());
            }
            if let Some(list) = servers.as_array_mut() {
                let mut server = Map::new();
                server.insert("url".to_string(), Value::String(url.to_string()));
                list.insert(0, Value::Object(server));
            }
        }
        doc
    }
}

/// Collect every declared `operationId`, in declaration order, duplicates
/// included.
pub fn extract_operation_ids(document: &RoutingDocument) -> Result<Vec<String>, RoutingError> {
    let ids: Vec<String> = document
        .operations()?
        .into_iter()
        .filter_map(|op| op.operation_id)
        .collect();

    tracing::info!(operations = ?ids, "Operations discovered");
    Ok(ids)
}
