//! Handler functions for the authentication endpoints.
//!
//! Each handler validates input shape, delegates to `auth::service`, and maps
//! outcomes onto HTTP responses through `AuthError`. Password hashing runs on
//! the blocking pool so bcrypt work never stalls the request scheduler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{Extension, Json};
use tokio::task;

use super::errors::AuthError;
use super::models::{
    AuthResponse, Claims, DashboardResponse, LoginRequest, MessageResponse, SignupRequest,
};
use super::AppState;

fn join_error(e: task::JoinError) -> AuthError {
    AuthError::Internal {
        message: format!("hashing task failed: {e}"),
    }
}

fn bcrypt_error(e: bcrypt::BcryptError) -> AuthError {
    AuthError::Internal {
        message: format!("password hashing failed: {e}"),
    }
}

/// Reject empty or whitespace-only required fields.
fn require_field(value: &str, field: &'static str) -> Result<(), AuthError> {
    if value.trim().is_empty() {
        return Err(AuthError::MissingField { field });
    }
    Ok(())
}

/// POST /auth/signup — create an account and issue a session token.
pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AuthError> {
    let Json(body) = body?;
    require_field(&body.email, "email")?;
    require_field(&body.password, "password")?;

    let cost = state.bcrypt_cost;
    let password = body.password;
    let password_hash = task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(join_error)?
        .map_err(bcrypt_error)?;

    let principal = state
        .service
        .register_principal(&body.email, &password_hash)
        .await?;

    let token = state.tokens.issue(&principal)?;

    Ok(Json(AuthResponse {
        success: true,
        message: "Account created successfully".to_string(),
        token,
    }))
}

/// POST /auth/login — verify credentials and issue a session token.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AuthError> {
    let Json(body) = body?;
    require_field(&body.email, "email")?;
    require_field(&body.password, "password")?;

    let principal = state
        .service
        .lookup_principal_by_email(&body.email)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    let password = body.password;
    let stored_hash = principal.password_hash.clone();
    let valid = task::spawn_blocking(move || bcrypt::verify(password, &stored_hash))
        .await
        .map_err(join_error)?
        .map_err(bcrypt_error)?;

    if !valid {
        return Err(AuthError::InvalidCredentials);
    }

    let token = state.tokens.issue(&principal)?;

    Ok(Json(AuthResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
    }))
}

/// POST /auth/logout — stateless; the server holds no session to invalidate.
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse {
        success: true,
        message: "Logout successful. Please clear the token from your client.".to_string(),
    })
}

/// GET /auth/dashboard — protected; identity comes from the access guard.
///
/// A missing extension means the route was mounted without the guard, which
/// is a wiring error and surfaces as a 500 through the extractor rejection.
pub async fn dashboard(Extension(claims): Extension<Claims>) -> Json<DashboardResponse> {
    let message = format!("Welcome to your dashboard, {}", claims.email);
    Json(DashboardResponse {
        success: true,
        message,
        user: claims,
    })
}
