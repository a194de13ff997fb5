//! In-process credential store implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{normalize_email, Principal};
use super::{CredentialStore, StoreError};

/// Document store keyed by normalized email.
///
/// Concurrency control lives entirely inside this type (one RwLock over the
/// document map); the authentication path holds no other shared mutable
/// state, so concurrent requests stay independent.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    documents: RwLock<HashMap<String, Principal>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn create(&self, email: &str, password_hash: &str) -> Result<Principal, StoreError> {
        let key = normalize_email(email);
        let mut documents = self.documents.write().await;

        if documents.contains_key(&key) {
            return Err(StoreError::DuplicateEmail { email: key });
        }

        let principal = Principal {
            id: Uuid::new_v4(),
            email: key.clone(),
            password_hash: password_hash.to_owned(),
            created_at: Utc::now(),
        };
        documents.insert(key, principal.clone());

        Ok(principal)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Principal>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents.get(&normalize_email(email)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_normalizes_email() {
        let store = MemoryCredentialStore::new();
        let principal = store.create("  A@B.com ", "hash").await.unwrap();

        assert_eq!(principal.email, "a@b.com");
        assert!(store.find_by_email("a@b.com").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_case_insensitively() {
        let store = MemoryCredentialStore::new();
        store.create("A@B.com", "hash1").await.unwrap();

        let err = store.create("a@b.com", "hash2").await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail { .. }));

        // The original record is untouched.
        let stored = store.find_by_email("A@B.COM").await.unwrap().unwrap();
        assert_eq!(stored.password_hash, "hash1");
    }

    #[tokio::test]
    async fn test_find_by_email_normalizes_lookup() {
        let store = MemoryCredentialStore::new();
        let created = store.create("user@example.com", "hash").await.unwrap();

        let found = store
            .find_by_email("  USER@example.COM ")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, created.id);
    }

    #[tokio::test]
    async fn test_find_missing_email_is_none() {
        let store = MemoryCredentialStore::new();
        assert!(store.find_by_email("nobody@nowhere.com").await.unwrap().is_none());
    }
}
