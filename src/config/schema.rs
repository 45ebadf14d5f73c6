//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// The service being fronted.
    pub service: ServiceConfig,

    /// How the handler is reached.
    pub invoker: InvokerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request hardening.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:4001").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:4001".to_string(),
        }
    }
}

/// Service folder layout.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Service root folder.
    pub root: PathBuf,

    /// Routing document, relative to `root`.
    pub document: PathBuf,

    /// Environment name (e.g. "local", "dev").
    pub environment: String,
}

impl ServiceConfig {
    /// Absolute (or root-relative) path of the routing document.
    pub fn document_path(&self) -> PathBuf {
        self.root.join(&self.document)
    }

    /// Path of the service's `package.json`.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join("package.json")
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            document: PathBuf::from("swagger").join("oas30_templ.json"),
            environment: "local".to_string(),
        }
    }
}

/// Handler invocation settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InvokerConfig {
    /// Lambda-compatible invocation URL.
    pub url: String,

    /// Invocation timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for InvokerConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:9000/2015-03-31/functions/function/invocations".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 60 }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "0.0.0.0:8080"

            [service]
            root = "/srv/widgets"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.service.environment, "local");
        assert_eq!(
            config.service.document_path(),
            PathBuf::from("/srv/widgets/swagger/oas30_templ.json")
        );
        assert_eq!(config.invoker.timeout_secs, 30);
        assert!(!config.observability.metrics_enabled);
    }
}
