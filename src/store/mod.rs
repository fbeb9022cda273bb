//! Store Module
//!
//! Key-value backend access for user records. Users are persisted as hashes
//! under `user:<id>`, and a user exists exactly when its hash has at least
//! one field set.

pub mod memory;
pub mod redis;

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

pub use self::memory::InMemoryUserStore;
pub use self::redis::RedisUserStore;

// == Store Error Enum ==
/// Errors surfaced by store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A Redis command or connection failed
    #[error("redis command failed: {0}")]
    Redis(#[from] ::redis::RedisError),

    /// The store never connected and writes are rejected
    #[error("store is disabled, no backend connection")]
    Disabled,
}

// == Store Status ==
/// Connection state reported by the welcome endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    Connected,
    Disabled,
}

impl StoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreStatus::Connected => "connected",
            StoreStatus::Disabled => "disabled",
        }
    }
}

/// Builds the storage key for a user id. The id is used verbatim.
pub fn user_key(id: &str) -> String {
    format!("user:{}", id)
}

// == Store Trait ==
/// Hash operations the handlers need from the backend.
///
/// Each operation is a single network round-trip and individually atomic on
/// the backend side; no sequence of calls is atomic as a whole.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Upserts the given fields on the hash at `key`. Fields not mentioned
    /// keep their previously stored values.
    async fn hash_set(&self, key: &str, fields: &[(String, String)]) -> Result<(), StoreError>;

    /// Returns all fields of the hash at `key`; an empty map when the key
    /// does not exist.
    async fn hash_get_all(&self, key: &str) -> Result<HashMap<String, String>, StoreError>;

    /// Whether the key has any fields.
    async fn exists(&self, key: &str) -> Result<bool, StoreError>;

    /// Removes the key entirely. Returns how many keys were removed
    /// (0 = not found).
    async fn delete(&self, key: &str) -> Result<u64, StoreError>;
}

// == Disabled Store ==
/// Degraded-mode store installed when the backend is unreachable at startup.
///
/// Reads report absence so lookups translate to 404; writes fail with
/// [`StoreError::Disabled`].
#[derive(Debug, Default)]
pub struct DisabledStore;

#[async_trait]
impl UserStore for DisabledStore {
    async fn hash_set(&self, _key: &str, _fields: &[(String, String)]) -> Result<(), StoreError> {
        Err(StoreError::Disabled)
    }

    async fn hash_get_all(&self, _key: &str) -> Result<HashMap<String, String>, StoreError> {
        Ok(HashMap::new())
    }

    async fn exists(&self, _key: &str) -> Result<bool, StoreError> {
        Ok(false)
    }

    async fn delete(&self, _key: &str) -> Result<u64, StoreError> {
        Ok(0)
    }
}
