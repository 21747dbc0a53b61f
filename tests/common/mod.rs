#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use utility_bill_api::auth::{generate_jwt, Claims};
use utility_bill_api::config::SecurityConfig;
use utility_bill_api::handlers;
use utility_bill_api::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn security() -> SecurityConfig {
    SecurityConfig {
        jwt_secret: Some(TEST_SECRET.to_string()),
        token_ttl_secs: 3600,
        enable_cors: true,
    }
}

/// Router over a fresh in-memory store
pub fn test_app() -> Router {
    handlers::router(AppState::in_memory(security()))
}

/// Router with no signing secret configured
pub fn app_without_secret() -> Router {
    handlers::router(AppState::in_memory(SecurityConfig {
        jwt_secret: None,
        ..security()
    }))
}

pub fn token_for(email: &str) -> String {
    generate_jwt(TEST_SECRET, &Claims::new(email, 3600)).unwrap()
}

/// Token whose validity window elapsed two hours ago
pub fn expired_token_for(email: &str) -> String {
    generate_jwt(TEST_SECRET, &Claims::new(email, -7200)).unwrap()
}

/// Drive one request through the router and decode the JSON body
pub async fn send(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}
