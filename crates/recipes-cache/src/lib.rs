//! # Recipes Cache
//!
//! Cache-aside support for the recipe list endpoint.
//!
//! This crate provides:
//! - A [`CacheBackend`] abstraction with Redis and in-memory implementations
//! - [`RecipeCache`], which decides when the cached list is read, written,
//!   and invalidated
//! - Cache configuration from environment variables
//! - Cache key generation utilities
//!
//! The whole list lives under a single key with no expiry. Reads consult the
//! cache only when caching is enabled; writes invalidate it whenever a
//! backend is connected, so a cache left over from an earlier enabled run
//! never goes stale.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use recipes_cache::{CacheConfig, RecipeCache, RedisCache};
//!
//! let config = CacheConfig::from_env();
//! let backend = match config.connection_url() {
//!     Some(url) => Some(Arc::new(RedisCache::new(&url).await?) as _),
//!     None => None,
//! };
//! let cache = RecipeCache::new(backend, config.enabled, &config.key_prefix);
//!
//! if let Some(recipes) = cache.get_cached_list().await {
//!     // served from cache
//! }
//! ```

pub mod backend;
pub mod config;
pub mod keys;
pub mod recipes;
pub mod redis;

pub use backend::{CacheBackend, CacheError, InMemoryCache};
pub use config::CacheConfig;
pub use recipes::RecipeCache;
pub use redis::RedisCache;
