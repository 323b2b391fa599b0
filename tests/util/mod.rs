//! Test utilities shared by the integration tests

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use multiverse::server::{model::app::AppState, router};
use multiverse_test_utils::TestContext;
use serde_json::Value;
use tower::ServiceExt;

/// Extension trait for TestContext to build application state and the full app
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;

    fn into_app(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }

    fn into_app(&self) -> Router {
        router::app(self.into_app_state())
    }
}

/// Converts a handler response into its status and JSON body
///
/// The body is `Value::Null` when it is empty or not JSON.
pub async fn into_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// Sends a request through the full app and returns status and JSON body
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => Request::builder().method(method).uri(uri).body(Body::empty()),
    }
    .expect("Failed to build request");

    let resp = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router service is infallible");

    into_json(resp).await
}

/// Sends a request with a raw body and content type through the full app
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: &str,
    body: &'static str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .expect("Failed to build request");

    let resp = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router service is infallible");

    into_json(resp).await
}
