//! Invocation event subsystem.
//!
//! # Data Flow
//! ```text
//! GatewayRequest + MatchedRoute
//!     → proxy.rs (path parameters via routing::template, body to text)
//!     → ProxyEvent (fresh value per request)
//!     → invoker
//! ```

pub mod proxy;
pub mod request;

pub use proxy::{build_event, EventError, ProxyEvent};
pub use request::{GatewayRequest, MatchedRoute};
