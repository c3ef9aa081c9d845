//! Cache-aside policy for the recipe list.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use recipes_models::Recipe;

use crate::backend::CacheBackend;
use crate::keys;

/// Read, populate, and invalidate the cached recipe list.
///
/// Cache failures never fail a request: a read error or an undecodable
/// entry is treated as a miss, and write/delete errors are logged.
#[derive(Clone)]
pub struct RecipeCache {
    backend: Option<Arc<dyn CacheBackend>>,
    enabled: bool,
    key: String,
}

impl std::fmt::Debug for RecipeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecipeCache")
            .field("connected", &self.backend.is_some())
            .field("enabled", &self.enabled)
            .field("key", &self.key)
            .finish()
    }
}

impl RecipeCache {
    pub fn new(backend: Option<Arc<dyn CacheBackend>>, enabled: bool, prefix: &str) -> Self {
        Self {
            backend,
            enabled,
            key: keys::recipes::list(prefix),
        }
    }

    /// No backend at all: every read goes to the store.
    pub fn disconnected() -> Self {
        Self::new(None, false, "recipes")
    }

    /// Whether list reads consult the cache.
    pub fn is_enabled(&self) -> bool {
        self.enabled && self.backend.is_some()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the cached list on a hit. `None` on miss, on error, or when
    /// caching is disabled.
    pub async fn get_cached_list(&self) -> Option<Vec<Recipe>> {
        if !self.enabled {
            return None;
        }
        let backend = self.backend.as_ref()?;

        let raw = match backend.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(cache.key = %self.key, "Cache miss");
                return None;
            }
            Err(e) => {
                warn!(cache.key = %self.key, error = %e, "Cache read failed, falling back to store");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(recipes) => {
                debug!(cache.key = %self.key, "Cache hit");
                Some(recipes)
            }
            Err(e) => {
                warn!(cache.key = %self.key, error = %e, "Discarding undecodable cache entry");
                None
            }
        }
    }

    /// Stores the list with no expiry. Does nothing when caching is disabled.
    pub async fn set_cached_list(&self, recipes: &[Recipe]) {
        if !self.enabled {
            return;
        }
        let Some(backend) = &self.backend else { return };

        let json = match serde_json::to_string(recipes) {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "Failed to serialize recipe list for cache");
                return;
            }
        };

        match backend.set(&self.key, json).await {
            Ok(()) => info!(cache.key = %self.key, count = recipes.len(), "Cached recipe list"),
            Err(e) => warn!(cache.key = %self.key, error = %e, "Failed to cache recipe list"),
        }
    }

    /// Deletes the cached list. Runs whenever a backend is connected, even
    /// with caching disabled.
    pub async fn invalidate(&self) {
        let Some(backend) = &self.backend else { return };

        match backend.delete(&self.key).await {
            Ok(()) => info!(cache.key = %self.key, "Removed recipe list from cache"),
            Err(e) => error!(cache.key = %self.key, error = %e, "Failed to invalidate recipe list"),
        }
    }
}
