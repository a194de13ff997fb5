//! AuthGate backend library.
//!
//! JWT-based signup/login/dashboard API over a pluggable credential store.
//! `app` assembles the full router; the binary in `main.rs` wires it to
//! configuration, logging, and a TCP listener.

pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod middleware;

use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

use auth::AppState;

/// Build the full application router with its middleware stack.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .nest("/auth", auth::routes::router(state))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .layer(middleware::cors_layer())
        .layer(RequestBodyLimitLayer::new(middleware::MAX_BODY_SIZE))
        .layer(TimeoutLayer::new(Duration::from_secs(
            middleware::REQUEST_TIMEOUT_SECS,
        )))
}

async fn root_handler() -> &'static str {
    "Welcome to AuthGate!"
}
