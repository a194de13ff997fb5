//! Session token issuance and verification.
//!
//! Tokens are HS256 JWTs carrying `{id, email, iat, exp}`. The keys are built
//! once at startup from the configured secret; rotating the secret implicitly
//! invalidates every outstanding token.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::errors::AuthError;
use super::models::Claims;
use crate::database::models::Principal;

/// Signing and verification material for session tokens.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_seconds: i64,
}

impl TokenKeys {
    pub fn new(secret: &[u8], ttl_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact; no grace window.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl_seconds: ttl_seconds as i64,
        }
    }

    /// Issue a token for a principal, valid for the configured lifetime.
    pub fn issue(&self, principal: &Principal) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            id: principal.id.to_string(),
            email: principal.email.clone(),
            iat: now,
            exp: now + self.ttl_seconds,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(|e| {
            AuthError::Internal {
                message: format!("token signing failed: {e}"),
            }
        })
    }

    /// Verify signature and expiry, returning the decoded claims.
    ///
    /// Bad signature, malformed token, and expired token all collapse into
    /// `InvalidToken`; the guard does not tell clients which check failed.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}
