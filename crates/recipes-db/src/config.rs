use std::env;
use std::time::Duration;

use anyhow::Context;

const DEFAULT_SERVER_SELECTION_TIMEOUT_MS: u64 = 5000;

/// MongoDB connection settings.
///
/// `MONGO_URI` and `MONGO_DB_NAME` are required;
/// `MONGO_SERVER_SELECTION_TIMEOUT_MS` bounds both server selection and the
/// initial connect.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub db_name: String,
    pub server_selection_timeout: Duration,
}

impl MongoConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let uri = env::var("MONGO_URI").context("MONGO_URI must be set")?;
        let db_name = env::var("MONGO_DB_NAME").context("MONGO_DB_NAME must be set")?;

        let timeout_ms = match env::var("MONGO_SERVER_SELECTION_TIMEOUT_MS") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("Invalid MONGO_SERVER_SELECTION_TIMEOUT_MS: {raw}"))?,
            Err(_) => DEFAULT_SERVER_SELECTION_TIMEOUT_MS,
        };

        Ok(Self {
            uri,
            db_name,
            server_selection_timeout: Duration::from_millis(timeout_ms),
        })
    }
}
