//! # Recipes DB
//!
//! MongoDB connection management and the store adapters for the Recipes API.
//!
//! - [`config`]: Connection settings read from the environment
//! - [`mongo`]: Connected client wrapper and index setup
//! - [`recipes`]: The [`RecipeStore`] trait with MongoDB and in-memory adapters
//! - [`users`]: The [`UserStore`] trait with MongoDB and in-memory adapters
//! - [`seed`]: Fixture loading and bulk seeding
//!
//! # Example
//!
//! ```ignore
//! use recipes_db::{Database, MongoConfig, MongoRecipeStore, RecipeStore};
//!
//! let config = MongoConfig::from_env()?;
//! let db = Database::connect(&config).await?;
//! let store = MongoRecipeStore::new(&db);
//!
//! let recipes = store.list_all().await?;
//! ```

pub mod config;
pub mod error;
pub mod mongo;
pub mod recipes;
pub mod seed;
pub mod users;

pub use config::MongoConfig;
pub use error::StoreError;
pub use mongo::Database;
pub use recipes::{InMemoryRecipeStore, MongoRecipeStore, RecipeStore, parse_object_id};
pub use seed::{load_fixture, seed_from_fixture};
pub use users::{InMemoryUserStore, MongoUserStore, UserStore};
