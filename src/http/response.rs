//! Response handling and transformation.
//!
//! # Responsibilities
//! - Render the handler's proxy response for the client
//! - Map dispatch failures to HTTP status codes
//!
//! # Design Decisions
//! - The handler body is JSON text; it is parsed and re-sent as JSON
//! - Handler response headers are not forwarded
//! - Client mistakes are 400 (413 for an oversize body), everything else is
//!   a generic 500

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

use crate::event::EventError;
use crate::invoke::{InvokeError, ProxyResponse};

/// Errors raised while dispatching a request to the handler.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("failed to read request body: {0}")]
    BodyRead(#[source] axum::Error),

    #[error(transparent)]
    Event(#[from] EventError),

    #[error(transparent)]
    Invoke(#[from] InvokeError),

    #[error("handler returned invalid status code {0}")]
    InvalidStatus(u16),

    #[error("handler body is not valid JSON: {0}")]
    ResponseBody(#[source] serde_json::Error),
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        match self {
            DispatchError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            DispatchError::PayloadTooLarge { .. } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(json!({ "error": "Request body too large" })),
            )
                .into_response(),
            DispatchError::BodyRead(_) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Failed to read request body" })),
            )
                .into_response(),
            _ => internal_error(),
        }
    }
}

pub fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
        .into_response()
}

pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}

/// Turn the handler's response into the client response.
///
/// A missing body yields an empty response with the handler's status.
pub fn render(response: ProxyResponse) -> Result<Response, DispatchError> {
    let status = StatusCode::from_u16(response.status_code)
        .map_err(|_| DispatchError::InvalidStatus(response.status_code))?;

    match response.body {
        Some(body) => {
            let value: Value = serde_json::from_str(&body).map_err(DispatchError::ResponseBody)?;
            Ok((status, Json(value)).into_response())
        }
        None => Ok(status.into_response()),
    }
}
