//! Persisted record types for the credential store.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered account: one document per normalized email.
///
/// `id` and `created_at` are assigned at creation and never change. The
/// struct is internal to the server; it is never serialized into a client
/// response, so the password hash cannot leak through this type.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: Uuid,
    /// Normalized (trimmed, lowercased) email, unique across the store.
    pub email: String,
    /// bcrypt digest of the password; never the plaintext.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Canonical form of an email used as the uniqueness key.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
