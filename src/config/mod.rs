//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → CLI overrides applied once at startup
//!
//! service folder
//!     → manifest.rs (package.json name/project)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod manifest;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use manifest::ServiceManifest;
pub use schema::{
    GatewayConfig, InvokerConfig, ListenerConfig, ObservabilityConfig, SecurityConfig,
    ServiceConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
