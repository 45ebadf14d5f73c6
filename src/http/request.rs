//! Request handling and transformation.
//!
//! # Responsibilities
//! - Generate unique request ID (UUID v4)
//! - Enforce the body size limit (413 when exceeded)
//! - Turn an axum request into a `GatewayRequest`
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Only JSON bodies are parsed; anything else is seen as `{}`
//! - An empty body is `{}`, never `null`
//! - Repeated headers and query keys keep the last value

use axum::body::Body;
use axum::extract::Query;
use axum::http::{HeaderValue, Request};
use http_body_util::LengthLimitError;
use serde_json::Value;
use std::collections::HashMap;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::event::GatewayRequest;
use crate::http::response::DispatchError;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates a UUID v4 `x-request-id` for requests that lack one.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// The request id set by the request id layer, or `"unknown"`.
pub fn request_id<B>(request: &Request<B>) -> String {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

/// Read method, path, headers, query and body from an axum request.
pub async fn read_request(
    request: Request<Body>,
    max_body_size: usize,
) -> Result<GatewayRequest, DispatchError> {
    let (parts, body) = request.into_parts();

    let headers: HashMap<String, String> = parts
        .headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();

    let query = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
        .map(|Query(q)| q)
        .map_err(|e| DispatchError::BadRequest(e.body_text()))?;

    let bytes = axum::body::to_bytes(body, max_body_size)
        .await
        .map_err(|e| {
            if exceeds_limit(&e) {
                DispatchError::PayloadTooLarge { limit: max_body_size }
            } else {
                DispatchError::BodyRead(e)
            }
        })?;

    let is_json = headers
        .get("content-type")
        .map(|ct| ct.contains("json"))
        .unwrap_or(false);

    let body = if is_json && !bytes.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice::<Value>(&bytes)
            .map_err(|e| DispatchError::BadRequest(format!("Invalid JSON body: {}", e)))?
    } else {
        if !bytes.is_empty() && !is_json {
            tracing::debug!(len = bytes.len(), "Ignoring non-JSON request body");
        }
        Value::Object(Default::default())
    };

    Ok(GatewayRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        headers,
        query,
        body,
    })
}

/// Whether a body read failed on the size limit rather than on I/O.
fn exceeds_limit(error: &axum::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(error);
    while let Some(e) = source {
        if e.is::<LengthLimitError>() {
            return true;
        }
        source = e.source();
    }
    false
}
