//! Orchestration layer between handlers and the credential store.
//!
//! Pure delegation, no business rules of its own. Store errors propagate as
//! typed `AuthError` variants so the handler can map duplicate emails,
//! storage failures, and missing principals to different responses.

use std::sync::Arc;

use super::errors::AuthError;
use crate::database::models::Principal;
use crate::database::CredentialStore;

/// Authentication service over an abstract credential store.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Persist a new principal with an already-hashed password.
    pub async fn register_principal(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Principal, AuthError> {
        let principal = self.store.create(email, password_hash).await?;
        tracing::info!(principal_id = %principal.id, "principal registered");
        Ok(principal)
    }

    /// Fetch a principal by email; `None` means no such account.
    pub async fn lookup_principal_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Principal>, AuthError> {
        Ok(self.store.find_by_email(email).await?)
    }
}
