//! Request-level error taxonomy for the authentication flow.
//!
//! Every handler and the access guard funnel failures through `AuthError`,
//! which maps each case to its HTTP status and JSON body. Duplicate emails,
//! storage failures, and missing principals are separate variants so the
//! mapping stays precise instead of collapsing them into one generic error.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::database::StoreError;

/// Errors that terminate a single request.
#[derive(Error, Debug)]
pub enum AuthError {
    /// A required field was empty or missing.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// The request body could not be parsed.
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    /// The email is already registered.
    #[error("Error creating account")]
    DuplicateEmail,

    /// The storage backend failed.
    #[error("Storage failure: {message}")]
    Storage { message: String },

    /// No principal exists for the given email.
    #[error("User not found")]
    UserNotFound,

    /// The password did not match the stored hash.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No bearer token on a protected route.
    #[error("No token provided")]
    MissingToken,

    /// Bad signature, malformed token, or expired token.
    #[error("Unauthorized: Invalid token")]
    InvalidToken,

    /// Any other downstream failure (hashing, signing, task join).
    #[error("{message}")]
    Internal { message: String },
}

impl AuthError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingField { .. }
            | AuthError::InvalidBody { .. }
            | AuthError::DuplicateEmail => StatusCode::BAD_REQUEST,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::InvalidCredentials | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::MissingToken => StatusCode::FORBIDDEN,
            AuthError::Storage { .. } | AuthError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn is_guard_rejection(&self) -> bool {
        matches!(self, AuthError::MissingToken | AuthError::InvalidToken)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        tracing::warn!(status = %status, error = %message, "request failed");

        // Guard rejections carry a bare message; handler errors carry the
        // success flag expected by API clients.
        let body = if self.is_guard_rejection() {
            serde_json::json!({ "message": message })
        } else {
            serde_json::json!({ "success": false, "message": message })
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail { .. } => AuthError::DuplicateEmail,
            StoreError::Backend { message } => AuthError::Storage { message },
        }
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::InvalidBody {
            message: rejection.body_text(),
        }
    }
}
