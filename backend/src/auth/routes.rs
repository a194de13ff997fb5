//! HTTP routes for the authentication flow.
//!
//! Builds the router mounted under `/auth`. The dashboard route is the only
//! one wrapped by the access guard; signup, login, and logout are public.

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;

use super::handlers;
use super::middleware::require_auth;
use super::AppState;

/// Assemble the authentication router.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/dashboard", get(handlers::dashboard))
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    let public = Router::new()
        .route("/signup", post(handlers::signup))
        .route("/login", post(handlers::login))
        .route("/logout", post(handlers::logout));

    protected.merge(public).with_state(state)
}
