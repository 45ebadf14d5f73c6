//! Local API gateway for Lambda-style services.
//!
//! Serves the operations declared in a service's OpenAPI routing document,
//! turns each request into an API Gateway proxy event and hands it to the
//! service's handler.

pub mod config;
pub mod event;
pub mod http;
pub mod invoke;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::GatewayConfig;
pub use event::{build_event, GatewayRequest, MatchedRoute, ProxyEvent};
pub use http::GatewayServer;
pub use invoke::{HttpInvoker, Invoker, ProxyResponse};
pub use lifecycle::Shutdown;
pub use routing::{extract_operation_ids, OperationId, RoutingDocument, TemplateMatch};
