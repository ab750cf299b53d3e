//! Shared fixtures: a seeded in-memory store, wired services, and a router
//! driven through `tower::ServiceExt::oneshot`.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use rawmart_api::config::AppConfig;
use rawmart_api::services::AppServices;
use rawmart_api::store::seed::seed_demo_catalog;
use rawmart_api::store::MemoryStore;
use rawmart_api::{build_router, events, AppState};

pub fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    seed_demo_catalog(&store);
    store
}

/// Services over the given store, with the event channel drained in the
/// background.
pub fn services(store: Arc<MemoryStore>) -> AppServices {
    let (sender, mut rx) = events::channel(64);
    tokio::spawn(async move { while rx.recv().await.is_some() {} });
    AppServices::with_memory_store(store, sender)
}

pub fn seeded_services() -> AppServices {
    services(seeded_store())
}

fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        environment: "test".into(),
        log_level: "warn".into(),
        log_json: false,
        seed_demo: true,
    }
}

/// Full application router over a freshly seeded store.
pub fn test_app() -> Router {
    let store = seeded_store();
    let (event_sender, mut rx) = events::channel(64);
    tokio::spawn(async move { while rx.recv().await.is_some() {} });

    let services = AppServices::with_memory_store(store, event_sender.clone());
    build_router(AppState {
        config: test_config(),
        services,
        event_sender,
    })
}

/// One request through the router; the router is cheap to clone per call.
pub async fn request(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    app.clone().oneshot(request).await.expect("response")
}

pub async fn response_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("response body bytes")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json response")
}
