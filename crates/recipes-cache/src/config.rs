//! Redis cache configuration.
//!
//! This module provides configuration for Redis connection settings
//! loaded from environment variables.

use std::env;

/// Redis cache configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `REDIS_URI`: `host:port` or a full `redis://` URL (unset: no cache backend)
/// - `REDIS_PASSWORD`: Password, used only when `REDIS_URI` is `host:port`
/// - `REDIS_DB`: Database index (default: `0`)
/// - `ENABLE_REDIS_CACHE`: Serve list reads from the cache (default: `false`)
/// - `CACHE_PREFIX`: Prefix for all cache keys (default: `recipes`)
#[derive(Clone, Debug)]
pub struct CacheConfig {
    pub redis_uri: Option<String>,
    pub password: Option<String>,
    pub db: i64,
    pub enabled: bool,
    pub key_prefix: String,
}

impl CacheConfig {
    pub fn from_env() -> Self {
        Self {
            redis_uri: env::var("REDIS_URI").ok().filter(|v| !v.trim().is_empty()),
            password: env::var("REDIS_PASSWORD").ok().filter(|v| !v.is_empty()),
            db: env::var("REDIS_DB")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            enabled: env::var("ENABLE_REDIS_CACHE")
                .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
                .unwrap_or(false),
            key_prefix: env::var("CACHE_PREFIX").unwrap_or_else(|_| "recipes".into()),
        }
    }

    /// Connection URL for the Redis client, or `None` when no backend is
    /// configured.
    ///
    /// A value that already has a scheme is used as-is.
    ///
    /// # Example
    ///
    /// ```ignore
    /// // REDIS_URI=localhost:6379 REDIS_PASSWORD=s3cret REDIS_DB=2
    /// assert_eq!(config.connection_url().unwrap(), "redis://:s3cret@localhost:6379/2");
    /// ```
    pub fn connection_url(&self) -> Option<String> {
        let uri = self.redis_uri.as_deref()?;

        if uri.contains("://") {
            return Some(uri.to_string());
        }

        Some(match &self.password {
            Some(password) => format!("redis://:{}@{}/{}", password, uri, self.db),
            None => format!("redis://{}/{}", uri, self.db),
        })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_uri: None,
            password: None,
            db: 0,
            enabled: false,
            key_prefix: "recipes".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(uri: &str) -> CacheConfig {
        CacheConfig {
            redis_uri: Some(uri.to_string()),
            ..CacheConfig::default()
        }
    }

    #[test]
    fn test_no_uri_means_no_backend() {
        assert!(CacheConfig::default().connection_url().is_none());
    }

    #[test]
    fn test_host_port_is_expanded() {
        assert_eq!(
            config("localhost:6379").connection_url().unwrap(),
            "redis://localhost:6379/0"
        );
    }

    #[test]
    fn test_password_and_db_are_applied() {
        let cfg = CacheConfig {
            password: Some("s3cret".into()),
            db: 2,
            ..config("cache:6380")
        };
        assert_eq!(
            cfg.connection_url().unwrap(),
            "redis://:s3cret@cache:6380/2"
        );
    }

    #[test]
    fn test_full_url_is_used_verbatim() {
        let cfg = CacheConfig {
            password: Some("ignored".into()),
            ..config("rediss://user:pw@example.com:6380/1")
        };
        assert_eq!(
            cfg.connection_url().unwrap(),
            "rediss://user:pw@example.com:6380/1"
        );
    }
}
