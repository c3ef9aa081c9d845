//! Redis cache backend.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, instrument};

use crate::backend::{CacheBackend, CacheError};

/// Redis client backed by a reconnecting connection manager.
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCache").finish_non_exhaustive()
    }
}

impl RedisCache {
    /// Connects to Redis.
    ///
    /// # Arguments
    ///
    /// * `redis_url` - Redis connection URL (e.g., "redis://localhost:6379/0")
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Connection` if connection fails.
    pub async fn new(redis_url: &str) -> Result<Self, CacheError> {
        let client = Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl CacheBackend for RedisCache {
    #[instrument(skip(self), fields(cache.operation = "GET"))]
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;

        debug!(cache.key = %key, hit = value.is_some(), "Redis GET");

        Ok(value)
    }

    #[instrument(skip(self, value), fields(cache.operation = "SET"))]
    async fn set(&self, key: &str, value: String) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();

        conn.set::<_, _, ()>(key, value).await?;

        debug!(cache.key = %key, "Cache set");

        Ok(())
    }

    #[instrument(skip(self), fields(cache.operation = "DEL"))]
    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();

        conn.del::<_, ()>(key).await?;

        debug!(cache.key = %key, "Cache invalidated");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a running Redis instance

    #[tokio::test]
    #[ignore = "requires Redis"]
    async fn test_set_get_delete() {
        let cache = RedisCache::new("redis://localhost:6379/0").await.unwrap();

        cache
            .set("recipes-test:key", r#"[{"id":1}]"#.to_string())
            .await
            .unwrap();

        let retrieved = cache.get("recipes-test:key").await.unwrap();
        assert_eq!(retrieved.as_deref(), Some(r#"[{"id":1}]"#));

        cache.delete("recipes-test:key").await.unwrap();
        assert_eq!(cache.get("recipes-test:key").await.unwrap(), None);
    }
}
