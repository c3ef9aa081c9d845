//! HTTP server and process-level settings.
//!
//! # Environment Variables
//!
//! - `PORT`: listener port (default: `8080`)
//! - `ENVIRONMENT`: `development` (default) or `production`
//! - `STORE_BACKEND`: `mongo` (default) or `memory`
//! - `INITIALIZE_DB`: seed recipes from the fixture on start (default: `false`)
//! - `RECIPES_FIXTURE`: fixture path (default: `recipes.json`)
//! - `METRICS_PORT`: Prometheus exporter port (default: `9090`)

use std::env;
use std::path::PathBuf;

use crate::env_flag;

/// Deployment mode. Production masks internal error details in 5xx bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        match env::var("ENVIRONMENT")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" | "release" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

/// Backing store for recipes and users.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Mongo,
    Memory,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub environment: Environment,
    pub store_backend: StoreBackend,
    pub initialize_db: bool,
    pub fixture_path: PathBuf,
    pub metrics_port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            environment: Environment::from_env(),
            store_backend: match env::var("STORE_BACKEND").as_deref() {
                Ok("memory") => StoreBackend::Memory,
                _ => StoreBackend::Mongo,
            },
            initialize_db: env_flag("INITIALIZE_DB", false),
            fixture_path: env::var("RECIPES_FIXTURE")
                .unwrap_or_else(|_| "recipes.json".to_string())
                .into(),
            metrics_port: env::var("METRICS_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(9090),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            environment: Environment::Development,
            store_backend: StoreBackend::Mongo,
            initialize_db: false,
            fixture_path: PathBuf::from("recipes.json"),
            metrics_port: 9090,
        }
    }
}
