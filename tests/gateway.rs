//! End-to-end tests: client → gateway → fake Lambda endpoint.

use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

mod common;

fn proxy_response(status_code: u16, body: &Value) -> String {
    json!({"statusCode": status_code, "body": body.to_string()}).to_string()
}

#[tokio::test]
async fn test_event_reaches_handler() {
    let seen: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
    let recorded = seen.clone();
    let lambda = common::start_lambda_emulator(move |body| {
        let recorded = recorded.clone();
        async move {
            let event: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
            recorded.lock().unwrap().push(event.clone());
            (200, proxy_response(200, &json!({"echo": event})))
        }
    })
    .await;

    let (gateway, shutdown) = common::start_gateway(format!("http://{}/invoke", lambda)).await;

    let res = common::client()
        .get(format!("http://{}/widgets/42?expand=parts", gateway))
        .header("authorization", "Bearer secret")
        .send()
        .await
        .expect("Gateway unreachable");

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    let event = &body["echo"];
    assert_eq!(event["httpMethod"], "GET");
    assert_eq!(event["path"], "/widgets/42");
    assert_eq!(event["resource"], "/widgets/{id}");
    assert_eq!(event["pathParameters"], json!({"id": "42"}));
    assert_eq!(event["queryStringParameters"], json!({"expand": "parts"}));
    assert_eq!(event["headers"], json!({}));
    assert_eq!(event["body"], "{}");

    assert_eq!(seen.lock().unwrap().len(), 1);
    shutdown.trigger();
}

#[tokio::test]
async fn test_sequential_requests_do_not_leak() {
    let lambda = common::start_lambda_emulator(|body| async move {
        let event: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
        (200, proxy_response(200, &event))
    })
    .await;
    let (gateway, shutdown) = common::start_gateway(format!("http://{}/invoke", lambda)).await;
    let client = common::client();

    let first: Value = client
        .post(format!("http://{}/widgets", gateway))
        .json(&json!({"name": "bolt"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = client
        .get(format!("http://{}/widgets/7", gateway))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(first["path"], "/widgets");
    assert_eq!(first["pathParameters"], Value::Null);
    assert_eq!(first["body"], r#"{"name":"bolt"}"#);
    assert_eq!(first["headers"]["content-type"], "application/json");

    assert_eq!(second["path"], "/widgets/7");
    assert_eq!(second["pathParameters"], json!({"id": "7"}));
    assert_eq!(second["body"], "{}");

    shutdown.trigger();
}

#[tokio::test]
async fn test_handler_status_is_forwarded() {
    let lambda = common::start_lambda_emulator(|_| async move {
        (200, proxy_response(404, &json!({"message": "no such widget"})))
    })
    .await;
    let (gateway, shutdown) = common::start_gateway(format!("http://{}/invoke", lambda)).await;

    let res = common::client()
        .get(format!("http://{}/widgets/99", gateway))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "no such widget");

    shutdown.trigger();
}

#[tokio::test]
async fn test_handler_failure_is_internal_error() {
    let lambda = common::start_lambda_emulator(|_| async move {
        (200, json!({"errorMessage": "boom", "errorType": "Error"}).to_string())
    })
    .await;
    let (gateway, shutdown) = common::start_gateway(format!("http://{}/invoke", lambda)).await;

    let res = common::client()
        .get(format!("http://{}/widgets", gateway))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 500);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Internal server error"}));

    shutdown.trigger();
}

#[tokio::test]
async fn test_invocation_error_status_is_internal_error() {
    let lambda = common::start_lambda_emulator(|_| async move {
        (502, json!({"message": "Bad Gateway"}).to_string())
    })
    .await;
    let (gateway, shutdown) = common::start_gateway(format!("http://{}/invoke", lambda)).await;

    let res = common::client()
        .get(format!("http://{}/widgets/5", gateway))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 500);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Internal server error"}));

    shutdown.trigger();
}

#[tokio::test]
async fn test_unreachable_handler_is_internal_error() {
    // Bind then drop to get a port nobody listens on.
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let (gateway, shutdown) = common::start_gateway(format!("http://{}/invoke", addr)).await;

    let res = common::client()
        .get(format!("http://{}/widgets", gateway))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);

    shutdown.trigger();
}

#[tokio::test]
async fn test_undeclared_operation_is_not_routed() {
    let lambda = common::start_lambda_emulator(|_| async move {
        (200, proxy_response(200, &json!({})))
    })
    .await;
    let (gateway, shutdown) = common::start_gateway(format!("http://{}/invoke", lambda)).await;
    let client = common::client();

    // Declared without an operationId.
    let res = client
        .delete(format!("http://{}/widgets/1", gateway))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 405);

    let res = client
        .get(format!("http://{}/gadgets", gateway))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    shutdown.trigger();
}

#[tokio::test]
async fn test_invalid_json_is_bad_request() {
    let lambda = common::start_lambda_emulator(|_| async move {
        (200, proxy_response(200, &json!({})))
    })
    .await;
    let (gateway, shutdown) = common::start_gateway(format!("http://{}/invoke", lambda)).await;

    let res = common::client()
        .post(format!("http://{}/widgets", gateway))
        .header("content-type", "application/json")
        .body("{oops")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    shutdown.trigger();
}
