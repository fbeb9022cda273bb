//! Redis Store
//!
//! [`UserStore`] implementation backed by a Redis server.
//!
//! Uses `redis::aio::ConnectionManager`, which reconnects automatically when
//! the connection drops; no retry policy is layered on top of that. The
//! manager is `Clone`, so each command clones the handle instead of locking.

use std::collections::HashMap;

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client};
use tracing::debug;

use super::{StoreError, UserStore};

/// Redis-backed user store sharing one managed connection process-wide.
#[derive(Clone)]
pub struct RedisUserStore {
    conn: ConnectionManager,
}

impl RedisUserStore {
    /// Connects to the Redis server at `url` (`redis://host:port`).
    ///
    /// The initial connection is awaited here; failure is returned to the
    /// caller, which decides whether to degrade or abort. The connection is
    /// closed by dropping the store.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let client = Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;
        debug!("Redis connection established");
        Ok(Self { conn })
    }
}

#[async_trait]
impl UserStore for RedisUserStore {
    async fn hash_set(&self, key: &str, fields: &[(String, String)]) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        let _: () = conn.hset_multiple(key, fields).await?;
        Ok(())
    }

    async fn hash_get_all(&self, key: &str) -> Result<HashMap<String, String>, StoreError> {
        let mut conn = self.conn.clone();
        let fields: HashMap<String, String> = conn.hgetall(key).await?;
        Ok(fields)
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let mut conn = self.conn.clone();
        let exists: bool = conn.exists(key).await?;
        Ok(exists)
    }

    async fn delete(&self, key: &str) -> Result<u64, StoreError> {
        let mut conn = self.conn.clone();
        let removed: u64 = conn.del(key).await?;
        Ok(removed)
    }
}
