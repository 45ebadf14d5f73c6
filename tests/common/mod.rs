//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use lambda_gateway::config::GatewayConfig;
use lambda_gateway::invoke::HttpInvoker;
use lambda_gateway::lifecycle::Shutdown;
use lambda_gateway::routing::{RouteTable, RoutingDocument};
use lambda_gateway::GatewayServer;

/// Start a fake Lambda invocation endpoint on an ephemeral port.
///
/// `f` receives the raw request body (the proxy event) and returns the
/// HTTP status and body the endpoint replies with.
pub async fn start_lambda_emulator<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let body = read_http_body(&mut socket).await;
                        let (status, body) = f(body).await;
                        let status_text = match status {
                            200 => "200 OK",
                            400 => "400 Bad Request",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Read one HTTP/1.1 request and return its body.
async fn read_http_body(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            return String::new();
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    String::from_utf8_lossy(&buf[header_end..]).to_string()
}

/// Routing document used by the integration tests.
pub fn widgets_document() -> RoutingDocument {
    RoutingDocument::from_value(serde_json::json!({
        "openapi": "3.0.1",
        "info": {"title": "widgets"},
        "servers": [{"url": "https://api.example.com"}],
        "paths": {
            "/widgets": {
                "get": {"operationId": "Widgets.list"},
                "post": {"operationId": "Widgets.create"}
            },
            "/widgets/{id}": {
                "get": {"operationId": "Widgets.get"},
                "delete": {"summary": "not dispatchable"}
            }
        }
    }))
}

/// Start the gateway on an ephemeral port, forwarding to `invoke_url`.
pub async fn start_gateway(invoke_url: String) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = GatewayConfig::default();
    config.listener.bind_address = addr.to_string();
    config.service.root = PathBuf::from(".");
    config.invoker.url = invoke_url;
    config.invoker.timeout_secs = 5;

    let document = widgets_document();
    let table = RouteTable::from_document(&document).unwrap();
    let invoker = Arc::new(HttpInvoker::new(&config.invoker).unwrap());
    let server = GatewayServer::new(config, &table, &document, invoker);

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
