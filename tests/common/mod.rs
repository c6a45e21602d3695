#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use device_registry::{RegistryState, Store, registry_router};
use serde_json::Value;
use tower::ServiceExt;

/// Fresh in-memory store with the schema applied and no seed data.
pub async fn empty_store() -> Store {
    let store = Store::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory store");
    store.ensure_schema().await.expect("failed to create schema");
    store
}

pub async fn test_app() -> (Router, Store) {
    let store = empty_store().await;
    let app = registry_router(RegistryState::new(store.clone()));
    (app, store)
}

/// Send one request; the body is parsed as JSON (`Null` when empty).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let resp = app
        .clone()
        .oneshot(builder.body(body).expect("failed to build request"))
        .await
        .expect("request failed");

    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    let json = serde_json::from_slice(&bytes).expect("response body was not JSON");
    (status, json)
}

pub async fn send_raw(app: &Router, method: &str, uri: &str, raw: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(raw.to_string()))
        .expect("failed to build request");
    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
