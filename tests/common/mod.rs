// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use link_fetcher::{
    fetcher::{Fetcher, FETCH_TIMEOUT},
    router::router,
    state::AppState,
};

/// Build the application router with the production fetch timeout.
pub fn create_test_app() -> Router {
    create_test_app_with_timeout(FETCH_TIMEOUT)
}

/// Build the application router with a custom fetch timeout, so timeout
/// scenarios don't have to wait ten seconds.
pub fn create_test_app_with_timeout(timeout: Duration) -> Router {
    let fetcher = Fetcher::new(timeout).expect("failed to build test fetcher");
    router(AppState { fetcher })
}

// ── Request helpers ──────────────────────────────────────────────────────────

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: &str,
    body: impl Into<String>,
) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.into()))
        .unwrap();
    send(app, req).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

// ── Scenario helpers ─────────────────────────────────────────────────────────

/// Submit `link` to the fetch endpoint.
pub async fn fetch_link(app: Router, link: &str) -> (StatusCode, Value) {
    post_json(app, "/buscar-link/", serde_json::json!({ "link": link })).await
}
