//! Proxy event assembly.
//!
//! # Responsibilities
//! - Build the API Gateway style proxy event handed to the handler
//! - Propagate only the `content-type` header
//! - Serialize the parsed body back to text
//!
//! # Design Decisions
//! - Every call builds a fresh event; nothing is shared between requests
//! - Serialization failures are returned, never swallowed

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::event::request::{GatewayRequest, MatchedRoute, CONTENT_TYPE};
use crate::routing::template::TemplateMatch;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("failed to serialize request body: {0}")]
    Body(#[from] serde_json::Error),
}

/// Normalized invocation event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyEvent {
    pub headers: HashMap<String, String>,
    pub http_method: String,
    pub path: String,
    pub resource: String,
    pub path_parameters: Option<HashMap<String, String>>,
    pub query_string_parameters: HashMap<String, String>,
    pub body: String,
}

/// Build the event for `request` matched to `route`.
pub fn build_event(request: &GatewayRequest, route: &MatchedRoute) -> Result<ProxyEvent, EventError> {
    let mut headers = HashMap::new();
    if let Some(content_type) = request.content_type() {
        headers.insert(CONTENT_TYPE.to_string(), content_type.to_string());
    }

    let path_parameters = TemplateMatch::parse(&route.path, &request.path).into_path_parameters();

    Ok(ProxyEvent {
        headers,
        http_method: request.method.clone(),
        path: request.path.clone(),
        resource: route.path.clone(),
        path_parameters,
        query_string_parameters: request.query.clone(),
        body: serde_json::to_string(&request.body)?,
    })
}
