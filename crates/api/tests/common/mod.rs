#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use stackboard_api::config::{LogFormat, ServerConfig, StorageBackend, DEFAULT_BODY_LIMIT_BYTES};
use stackboard_api::router::build_app_router;
use stackboard_api::state::AppState;
use stackboard_db::{MemoryStore, Store};

/// Build a test `ServerConfig` with safe defaults and in-memory storage.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        storage_backend: StorageBackend::Memory,
        database_url: None,
        db_max_connections: 1,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router over the given store.
///
/// Uses the production [`build_app_router`], so tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, fault boundary).
pub fn build_test_app_with(store: Arc<dyn Store>) -> Router {
    let config = test_config();
    let state = AppState::new(store, config.clone());
    build_app_router(state, &config)
}

/// Build the application over a fresh, empty [`MemoryStore`].
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(MemoryStore::new()))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Send a request with a raw, possibly empty or malformed, body.
pub async fn send_raw(app: &Router, method: Method, uri: &str, raw: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(raw))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a project through the API and return its `_id`.
pub async fn create_project(app: &Router, name: &str) -> String {
    let response = post_json(
        app,
        "/api/v1/project",
        serde_json::json!({
            "name": name,
            "deadline": "2026-12-31",
            "description": format!("{name} description"),
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "project fixture must be created");
    body_json(response).await["_id"]
        .as_str()
        .unwrap()
        .to_string()
}

/// A well-formed id that no record uses.
pub fn unused_id() -> String {
    stackboard_core::types::RecordId::generate().to_string()
}
