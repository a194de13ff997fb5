//! Access guard for protected routes.
//!
//! Per request the guard moves from unverified to either verified (claims
//! injected into the request extensions) or rejected. It is stateless and
//! performs no store lookups: the signature is trusted, so a principal
//! deleted after issuance still passes until the token expires.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use super::errors::AuthError;
use super::AppState;

/// Verify the bearer token and inject the decoded identity.
///
/// Missing header rejects with 403; a bad signature, malformed token, or
/// expired token rejects with 401.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)?;

    let claims = state.tokens.verify(token)?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
