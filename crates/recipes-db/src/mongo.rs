//! MongoDB client wrapper.

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, IndexModel};
use tracing::info;

use crate::config::MongoConfig;

pub const RECIPES_COLLECTION: &str = "recipes";
pub const USERS_COLLECTION: &str = "users";

/// A connected MongoDB client bound to one database.
#[derive(Debug, Clone)]
pub struct Database {
    db: mongodb::Database,
}

impl Database {
    /// Connects and pings the server so an unreachable deployment fails here
    /// rather than on the first request.
    ///
    /// # Errors
    ///
    /// Returns an error if the URI cannot be parsed, the server cannot be
    /// selected within the configured timeout, or index creation fails.
    pub async fn connect(config: &MongoConfig) -> anyhow::Result<Self> {
        let mut options = ClientOptions::parse(&config.uri).await?;
        options.server_selection_timeout = Some(config.server_selection_timeout);
        options.connect_timeout = Some(config.server_selection_timeout);
        options.app_name = Some("recipes-api".to_string());

        let client = Client::with_options(options)?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        info!(db = %config.db_name, "Successfully connected to MongoDB");

        let database = Self {
            db: client.database(&config.db_name),
        };
        database.ensure_indexes().await?;

        Ok(database)
    }

    /// Usernames are unique at the storage level as well as in the sign-up
    /// handler, so concurrent sign-ups cannot both succeed.
    async fn ensure_indexes(&self) -> anyhow::Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.db
            .collection::<mongodb::bson::Document>(USERS_COLLECTION)
            .create_index(index)
            .await?;

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}
