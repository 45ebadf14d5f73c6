//! Handler invocation subsystem.
//!
//! # Responsibilities
//! - Hand a `ProxyEvent` to the business-logic handler
//! - Decode the handler's proxy response
//!
//! # Design Decisions
//! - The handler is a black box behind the `Invoker` trait
//! - `HttpInvoker` talks to any Lambda-compatible invocation endpoint
//!   (e.g. the Lambda runtime interface emulator)
//! - No retries: failures surface to the caller immediately

pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::event::ProxyEvent;

pub use http::HttpInvoker;

/// Errors raised while invoking the handler.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("handler request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invocation endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("handler returned an invalid proxy response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Response returned by the handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
    /// JSON text; the gateway parses it before replying.
    #[serde(default)]
    pub body: Option<String>,
}

/// Something that can run the handler for an event.
#[async_trait]
pub trait Invoker: Send + Sync {
    async fn invoke(&self, event: &ProxyEvent) -> Result<ProxyResponse, InvokeError>;
}
