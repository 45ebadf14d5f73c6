//! Local API gateway for Lambda-style services.
//!
//! # Architecture Overview
//!
//! ```text
//! Client ──▶ http::server ──▶ routing ──▶ event ──▶ invoke ──▶ Handler
//!            (route per       (template,  (proxy    (HTTP POST)  (Lambda
//!             operation)       operation)  event)                 emulator)
//! Client ◀── http::response ◀────────────────────── ProxyResponse
//!
//! Cross-cutting: config, lifecycle, observability
//! ```
//!
//! Usage: `lambda-gateway <SERVICE_DIR> [PORT] [ENVIRONMENT] [--config FILE]`

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

use lambda_gateway::config::{load_config, GatewayConfig};
use lambda_gateway::http::GatewayServer;
use lambda_gateway::invoke::HttpInvoker;
use lambda_gateway::lifecycle::{self, Overrides, Shutdown};
use lambda_gateway::observability::{self, metrics};
use lambda_gateway::routing::DOCS_PATH;

#[derive(Parser)]
#[command(name = "lambda-gateway")]
#[command(about = "Serve a Lambda service's OpenAPI operations over local HTTP", long_about = None)]
struct Cli {
    /// Service folder (holds swagger/oas30_templ.json and package.json)
    service_dir: PathBuf,

    /// Port to listen on [default: 4001]
    port: Option<u16>,

    /// Environment name [default: local]
    environment: Option<String>,

    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    observability::init_logging(&config.observability.log_level);
    tracing::info!("lambda-gateway v{} starting", env!("CARGO_PKG_VERSION"));

    let overrides = Overrides {
        service_root: Some(cli.service_dir),
        port: cli.port,
        environment: cli.environment,
    };
    let prepared = lifecycle::prepare(config, &overrides)?;

    if prepared.config.observability.metrics_enabled {
        match prepared.config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %prepared.config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let invoker = Arc::new(HttpInvoker::new(&prepared.config.invoker)?);

    let listener = TcpListener::bind(&prepared.config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    let details = prepared
        .manifest
        .display_name()
        .map(|name| format!(" for [{}]", name))
        .unwrap_or_default();
    tracing::info!(
        "Running API{} at {}",
        details,
        prepared.config.service.root.display()
    );
    tracing::info!(
        environment = %prepared.config.service.environment,
        invoker = %invoker.url(),
        "Handler endpoint"
    );
    tracing::info!("Listening on http://localhost:{}", local_addr.port());
    tracing::info!("Routing document on http://localhost:{}{}", local_addr.port(), DOCS_PATH);

    let server = GatewayServer::new(
        prepared.config,
        &prepared.table,
        &prepared.document,
        invoker,
    );

    let shutdown = Shutdown::new();
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
