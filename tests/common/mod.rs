#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use bot_catalog_api::server::{app, AppState};
use bot_catalog_api::store::MemoryBotStore;

/// Fresh application backed by an empty in-memory store. Each test builds its
/// own so cases stay independent of execution order.
pub fn test_app() -> Router {
    app(AppState::new(Arc::new(MemoryBotStore::new())))
}

/// Drive one request through the router and decode the JSON body.
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("router");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, value)
}

/// Create one bot and return its id.
pub async fn seed_bot(app: &Router, name: &str, price: f64) -> i64 {
    let (status, body) = request(
        app,
        "POST",
        "/api/bots",
        Some(serde_json::json!({ "name": name, "price": price })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed bot failed: {}", body);
    body["data"]["id"].as_i64().expect("created id")
}
