//! In-Memory Store
//!
//! HashMap-backed [`UserStore`] with the same observable semantics as the
//! Redis implementation. Used by the test suite and handy for running the
//! service without a backend.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, UserStore};

/// Thread-safe in-memory hash store.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    hashes: RwLock<HashMap<String, HashMap<String, String>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn hash_set(&self, key: &str, fields: &[(String, String)]) -> Result<(), StoreError> {
        let mut hashes = self.hashes.write().await;
        let hash = hashes.entry(key.to_string()).or_default();
        for (field, value) in fields {
            hash.insert(field.clone(), value.clone());
        }
        Ok(())
    }

    async fn hash_get_all(&self, key: &str) -> Result<HashMap<String, String>, StoreError> {
        let hashes = self.hashes.read().await;
        Ok(hashes.get(key).cloned().unwrap_or_default())
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let hashes = self.hashes.read().await;
        Ok(hashes.get(key).is_some_and(|hash| !hash.is_empty()))
    }

    async fn delete(&self, key: &str) -> Result<u64, StoreError> {
        let mut hashes = self.hashes.write().await;
        Ok(if hashes.remove(key).is_some() { 1 } else { 0 })
    }
}
