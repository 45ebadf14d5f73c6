//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Routing document (OpenAPI JSON)
//!     → document.rs (declared operations, operation ids)
//!     → operation.rs (group/method decomposition)
//!     → router.rs (immutable dispatch table)
//!
//! Per request (route already matched by the HTTP router):
//!     template + actual path
//!     → template.rs (extract the `{id}` parameter)
//! ```
//!
//! # Design Decisions
//! - Tables built at startup, immutable at runtime
//! - No general templating: one `{id}` parameter at position 2 only
//! - Deterministic: declaration order is preserved everywhere

pub mod document;
pub mod operation;
pub mod router;
pub mod template;

pub use document::{extract_operation_ids, DeclaredOperation, RoutingDocument, RoutingError};
pub use operation::{OperationDescriptor, OperationId};
pub use router::{RouteBinding, RouteTable, DOCS_PATH};
pub use template::TemplateMatch;
