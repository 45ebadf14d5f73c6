//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Register one axum route per declared operation
//! - Wire up middleware (CORS, request ID, tracing, timeout, body limit)
//! - Dispatch matched requests: build the event, invoke the handler,
//!   render its response
//! - Serve the routing document for docs tooling
//! - Graceful shutdown

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Json, Router,
};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::event::{build_event, MatchedRoute};
use crate::http::request::{read_request, request_id, UuidRequestId};
use crate::http::response::{not_found, render, DispatchError};
use crate::invoke::Invoker;
use crate::lifecycle::signals::shutdown_signal;
use crate::observability::metrics;
use crate::routing::{RouteBinding, RouteTable, RoutingDocument, DOCS_PATH};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub invoker: Arc<dyn Invoker>,
    pub max_body_size: usize,
    pub docs: Arc<Value>,
}

/// HTTP server for the gateway.
pub struct GatewayServer {
    router: Router,
    config: GatewayConfig,
}

impl GatewayServer {
    /// Create a new server for the operations in `table`.
    pub fn new(
        config: GatewayConfig,
        table: &RouteTable,
        document: &RoutingDocument,
        invoker: Arc<dyn Invoker>,
    ) -> Self {
        let state = AppState {
            invoker,
            max_body_size: config.security.max_body_size,
            docs: Arc::new(document.with_local_server(&local_url(&config.listener.bind_address))),
        };

        let router = Self::build_router(&config, table, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GatewayConfig, table: &RouteTable, state: AppState) -> Router {
        let mut router = Router::new().route(DOCS_PATH, get(docs_handler));

        for (route, method_router) in method_routers(table) {
            router = router.route(&route, method_router);
        }

        router
            .fallback(|| async { not_found() })
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
            .layer(CorsLayer::permissive())
    }

    /// The router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until Ctrl+C or `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// `http://localhost:<port>` for a bind address.
pub fn local_url(bind_address: &str) -> String {
    match bind_address.parse::<SocketAddr>() {
        Ok(addr) => format!("http://localhost:{}", addr.port()),
        Err(_) => format!("http://{}", bind_address),
    }
}

/// One method router per route, routes in declaration order.
fn method_routers(table: &RouteTable) -> Vec<(String, MethodRouter<AppState>)> {
    let mut grouped: Vec<(String, MethodRouter<AppState>)> = Vec::new();

    for binding in table.bindings() {
        let route = binding.route.clone();
        let filter = binding.filter;
        let binding = Arc::new(binding.clone());
        let handler = move |State(state): State<AppState>, request: Request<Body>| {
            let binding = binding.clone();
            async move { dispatch(state, binding, request).await }
        };

        match grouped.iter().position(|(r, _)| *r == route) {
            Some(index) => {
                let (route, existing) = grouped.remove(index);
                grouped.insert(index, (route, existing.on(filter, handler)));
            }
            None => grouped.push((route, MethodRouter::new().on(filter, handler))),
        }
    }

    grouped
}

async fn docs_handler(State(state): State<AppState>) -> Json<Value> {
    Json((*state.docs).clone())
}

/// Handler shared by every operation route.
async fn dispatch(state: AppState, binding: Arc<RouteBinding>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let request_id = request_id(&request);
    let operation = binding.operation.as_str();

    tracing::debug!(
        request_id = %request_id,
        operation = %operation,
        method = %request.method(),
        path = %request.uri().path(),
        "Dispatching request"
    );

    let response = match invoke_operation(&state, &binding, request).await {
        Ok(response) => response,
        Err(e @ (DispatchError::BadRequest(_)
        | DispatchError::PayloadTooLarge { .. }
        | DispatchError::BodyRead(_))) => {
            tracing::warn!(request_id = %request_id, operation = %operation, error = %e, "Rejected request");
            e.into_response()
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, operation = %operation, error = %e, "Dispatch failed");
            e.into_response()
        }
    };

    metrics::record_invocation(operation, response.status().as_u16(), start);
    response
}

async fn invoke_operation(
    state: &AppState,
    binding: &RouteBinding,
    request: Request<Body>,
) -> Result<Response, DispatchError> {
    let request = read_request(request, state.max_body_size).await?;
    let event = build_event(&request, &MatchedRoute::new(binding.template.clone()))?;
    let response = state.invoker.invoke(&event).await?;

    tracing::debug!(
        operation = %binding.operation,
        status = response.status_code,
        "Handler responded"
    );

    render(response)
}
