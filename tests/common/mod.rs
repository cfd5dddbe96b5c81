#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use marketdesk::marketdesk_config::CorsConfig;
use marketdesk::marketdesk_core::PermissionCatalog;
use marketdesk::router::init_router;
use marketdesk::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_TOKEN: &str = "test-admin-token";

pub fn setup_test_app() -> Router {
    init_router(test_state())
}

pub fn test_state() -> AppState {
    AppState::in_memory(PermissionCatalog::marketplace(), CorsConfig::default())
}

/// Serves a fresh app on an ephemeral port and returns its base URL.
pub async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let app = setup_test_app();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", address)
}

/// Sends one request and returns the status with the JSON body
/// (`Value::Null` when the body is empty or not JSON).
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
