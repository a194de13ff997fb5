//! Authentication flow: signup, login, token verification, protected routes.
//!
//! Layering, leaf to root: the credential store (in `crate::database`) holds
//! principals; `service` orchestrates store access; `handlers` validate input
//! and map outcomes to responses; `middleware` guards protected routes by
//! verifying bearer tokens issued by `tokens`.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
pub mod tokens;

use std::sync::Arc;

// Re-exports for convenience
pub use errors::AuthError;
pub use models::Claims;
pub use service::AuthService;
pub use tokens::TokenKeys;

/// Shared state for the auth handlers and the access guard.
#[derive(Clone)]
pub struct AppState {
    pub service: AuthService,
    pub tokens: Arc<TokenKeys>,
    /// bcrypt cost factor used when hashing new passwords.
    pub bcrypt_cost: u32,
}
