//! rawmart-api library
//!
//! Backend for a street-food raw materials marketplace: a queryable
//! materials catalog joined with supplier data, per-session shopping carts,
//! and cart-to-order checkout.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod models;
pub mod services;
pub mod store;

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared state handed to every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub services: services::AppServices,
    pub event_sender: events::EventSender,
}

/// All `/api` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(handlers::materials::routes())
        .merge(handlers::cart::routes())
        .merge(handlers::orders::routes())
}

/// Builds the full application router with tracing and CORS layers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Street Food Raw Materials API" }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
