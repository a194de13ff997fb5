//! Global application error types.
//!
//! Errors that occur outside the scope of a single request — configuration
//! loading, logging setup, binding the listener — live here. Request-level
//! failures are modeled by `auth::errors::AuthError` instead, which knows how
//! to render itself as an HTTP response.

use thiserror::Error;

/// Startup and process-level error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O errors (listener bind, file access).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
