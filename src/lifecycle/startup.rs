//! Startup sequence.
//!
//! # Responsibilities
//! - Apply command line overrides to the loaded config
//! - Validate the final config
//! - Load the service manifest and routing document
//! - Build the dispatch table
//!
//! # Design Decisions
//! - Ordered startup: config first, then routing, then listeners
//! - Any failure aborts startup before a socket is bound

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::{validate_config, ConfigError, GatewayConfig, ServiceManifest};
use crate::routing::{RouteTable, RoutingDocument, RoutingError};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Routing(#[from] RoutingError),
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub service_root: Option<PathBuf>,
    pub port: Option<u16>,
    pub environment: Option<String>,
}

/// Everything the server needs, loaded and checked.
#[derive(Debug)]
pub struct Prepared {
    pub config: GatewayConfig,
    pub manifest: ServiceManifest,
    pub document: RoutingDocument,
    pub table: RouteTable,
}

/// Apply `overrides` onto `config`.
pub fn apply_overrides(config: &mut GatewayConfig, overrides: &Overrides) {
    if let Some(root) = &overrides.service_root {
        config.service.root = root.clone();
    }
    if let Some(environment) = &overrides.environment {
        config.service.environment = environment.clone();
    }
    if let Some(port) = overrides.port {
        config.listener.bind_address = match config.listener.bind_address.parse::<SocketAddr>() {
            Ok(mut addr) => {
                addr.set_port(port);
                addr.to_string()
            }
            Err(_) => format!("127.0.0.1:{}", port),
        };
    }
}

/// Run the startup sequence up to (not including) binding the listener.
pub fn prepare(mut config: GatewayConfig, overrides: &Overrides) -> Result<Prepared, StartupError> {
    apply_overrides(&mut config, overrides);
    validate_config(&config).map_err(ConfigError::Validation)?;

    let manifest = ServiceManifest::load(&config.service.manifest_path());
    let document = RoutingDocument::load(&config.service.document_path())?;
    let table = RouteTable::from_document(&document)?;

    tracing::info!(
        service = ?config.service.root,
        environment = %config.service.environment,
        operations = table.len(),
        "Service loaded"
    );

    Ok(Prepared {
        config,
        manifest,
        document,
        table,
    })
}
