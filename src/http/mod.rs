//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, one route per operation)
//!     → request.rs (request ID, body limit, GatewayRequest)
//!     → event::build_event → invoke::Invoker
//!     → response.rs (handler response or error → client)
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use response::DispatchError;
pub use server::{AppState, GatewayServer};
