//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! gateway server, invoker, routing:
//!     → logging.rs (structured log events, request id in fields)
//!     → metrics.rs (invocation counters and latency)
//! ```

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
