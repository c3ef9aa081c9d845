//! Authentication scheme selection.
//!
//! Protected routes are guarded by exactly one scheme per process: per-user
//! JWT bearer tokens (the default) or a single static API key sent in the
//! `X-API-KEY` header. The two are never accepted side by side.
//!
//! # Environment Variables
//!
//! - `AUTH_SCHEME`: `jwt` (default) or `api_key`
//! - `API_KEY`: shared secret, required when `AUTH_SCHEME=api_key`

use anyhow::{Context, bail};
use std::env;
use std::str::FromStr;

/// Header carrying the shared API key.
pub const API_KEY_HEADER: &str = "X-API-KEY";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthScheme {
    #[default]
    Jwt,
    ApiKey,
}

impl FromStr for AuthScheme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jwt" | "bearer" => Ok(Self::Jwt),
            "api_key" | "api-key" | "apikey" => Ok(Self::ApiKey),
            other => bail!("Unknown AUTH_SCHEME '{}', expected 'jwt' or 'api_key'", other),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AuthConfig {
    pub scheme: AuthScheme,
    pub api_key: Option<String>,
}

impl AuthConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let scheme = match env::var("AUTH_SCHEME") {
            Ok(value) => value.parse()?,
            Err(_) => AuthScheme::default(),
        };

        let api_key = env::var("API_KEY").ok().filter(|key| !key.is_empty());

        let config = Self { scheme, api_key };
        config.validate()?;
        Ok(config)
    }

    /// Builds an API-key configuration, mostly useful in tests.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self {
            scheme: AuthScheme::ApiKey,
            api_key: Some(key.into()),
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.scheme == AuthScheme::ApiKey {
            self.api_key
                .as_ref()
                .context("API_KEY must be set when AUTH_SCHEME is api_key")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scheme() {
        assert_eq!("jwt".parse::<AuthScheme>().unwrap(), AuthScheme::Jwt);
        assert_eq!("API_KEY".parse::<AuthScheme>().unwrap(), AuthScheme::ApiKey);
        assert_eq!("api-key".parse::<AuthScheme>().unwrap(), AuthScheme::ApiKey);
        assert!("oauth".parse::<AuthScheme>().is_err());
    }

    #[test]
    fn test_api_key_scheme_requires_key() {
        let config = AuthConfig {
            scheme: AuthScheme::ApiKey,
            api_key: None,
        };
        assert!(config.validate().is_err());
        assert!(AuthConfig::api_key("k").validate().is_ok());
    }

    #[test]
    fn test_default_is_jwt() {
        let config = AuthConfig::default();
        assert_eq!(config.scheme, AuthScheme::Jwt);
        assert!(config.validate().is_ok());
    }
}
