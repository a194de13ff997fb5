//! Request, response, and token payload types for the authentication flow.

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Success response carrying a freshly issued session token.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
}

/// Success response with no token (logout).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Response of the protected dashboard route.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub success: bool,
    pub message: String,
    /// Identity decoded from the presented token by the access guard.
    pub user: Claims,
}

/// JWT payload for a session token.
///
/// Validity is purely a function of the signature and `exp`; there is no
/// server-side session record, so a token stays valid until expiry even if
/// the account changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Principal id as a string.
    pub id: String,
    /// Normalized email at issuance time.
    pub email: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}
