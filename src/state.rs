use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use recipes_cache::{CacheConfig, RecipeCache, RedisCache};
use recipes_config::{AuthConfig, CorsConfig, JwtConfig, ServerConfig, StoreBackend};
use recipes_db::{
    Database, InMemoryRecipeStore, InMemoryUserStore, MongoConfig, MongoRecipeStore,
    MongoUserStore, RecipeStore, UserStore, seed_from_fixture,
};

/// Handles shared by every request. Clients are created once at startup and
/// dropped with the last clone of the state.
#[derive(Clone)]
pub struct AppState {
    pub recipes: Arc<dyn RecipeStore>,
    pub users: Arc<dyn UserStore>,
    pub cache: RecipeCache,
    pub jwt_config: JwtConfig,
    pub auth_config: AuthConfig,
    pub cors_config: CorsConfig,
    pub server_config: ServerConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("cache", &self.cache)
            .field("auth_scheme", &self.auth_config.scheme)
            .field("environment", &self.server_config.environment)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// State backed by in-memory stores and no cache backend.
    pub fn in_memory() -> Self {
        Self {
            recipes: Arc::new(InMemoryRecipeStore::new()),
            users: Arc::new(InMemoryUserStore::new()),
            cache: RecipeCache::disconnected(),
            jwt_config: JwtConfig::default(),
            auth_config: AuthConfig::default(),
            cors_config: CorsConfig::default(),
            server_config: ServerConfig::default(),
        }
    }
}

/// Builds the state from the environment.
///
/// # Errors
///
/// Fails if configuration is invalid or MongoDB cannot be reached. Redis
/// being unreachable is not an error; the server runs without a cache.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let server_config = ServerConfig::from_env();
    let auth_config = AuthConfig::from_env()?;

    let (recipes, users): (Arc<dyn RecipeStore>, Arc<dyn UserStore>) =
        match server_config.store_backend {
            StoreBackend::Mongo => {
                let mongo_config = MongoConfig::from_env()?;
                let db = Database::connect(&mongo_config)
                    .await
                    .context("Failed to connect to MongoDB")?;
                (
                    Arc::new(MongoRecipeStore::new(&db)),
                    Arc::new(MongoUserStore::new(&db)),
                )
            }
            StoreBackend::Memory => {
                warn!("Using in-memory store; data will not survive a restart");
                (
                    Arc::new(InMemoryRecipeStore::new()),
                    Arc::new(InMemoryUserStore::new()),
                )
            }
        };

    Ok(AppState {
        recipes,
        users,
        cache: init_cache(CacheConfig::from_env()).await,
        jwt_config: JwtConfig::from_env(),
        auth_config,
        cors_config: CorsConfig::from_env(),
        server_config,
    })
}

/// Imports the configured fixture into the recipe store.
///
/// A list cached by an earlier run no longer matches the store afterwards,
/// so it is dropped.
pub async fn seed_store(state: &AppState) -> anyhow::Result<usize> {
    let inserted =
        seed_from_fixture(state.recipes.as_ref(), &state.server_config.fixture_path).await?;
    state.cache.invalidate().await;
    Ok(inserted)
}

async fn init_cache(config: CacheConfig) -> RecipeCache {
    let Some(url) = config.connection_url() else {
        info!("REDIS_URI not set, running without a recipe cache");
        return RecipeCache::disconnected();
    };

    match RedisCache::new(&url).await {
        Ok(redis) => {
            info!(enabled = config.enabled, "Connected to Redis");
            RecipeCache::new(Some(Arc::new(redis)), config.enabled, &config.key_prefix)
        }
        Err(e) => {
            warn!(error = %e, "Failed to connect to Redis, running without a recipe cache");
            RecipeCache::disconnected()
        }
    }
}
