//! Persistence boundary for registered principals.
//!
//! The `CredentialStore` trait is the seam between the authentication service
//! and whatever engine actually holds the documents. The shipped
//! implementation lives in `queries` and keeps documents in process memory;
//! a driver-backed store only has to implement the same two operations.

pub mod models;
pub mod queries;

use async_trait::async_trait;
use thiserror::Error;

use models::Principal;

/// Errors surfaced by a credential store.
///
/// Duplicate emails and backend failures are distinct variants so callers can
/// map them to different responses instead of collapsing both into "absent".
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("email already registered: {email}")]
    DuplicateEmail { email: String },

    #[error("storage backend error: {message}")]
    Backend { message: String },
}

/// Storage contract for principals. No update or delete is exposed.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert a new principal. The email is normalized before use and must
    /// not already be present.
    async fn create(&self, email: &str, password_hash: &str) -> Result<Principal, StoreError>;

    /// Exact-match lookup on the normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Principal>, StoreError>;
}
