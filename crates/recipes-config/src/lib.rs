//! # Recipes Config
//!
//! Configuration types for the Recipes API, loaded from environment variables:
//!
//! - [`auth`]: Which authentication scheme guards protected routes
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`jwt`]: JWT signing secret and token lifetime
//! - [`server`]: Listener, environment mode, store backend, and seeding flags
//!
//! # Example
//!
//! ```ignore
//! use recipes_config::{AuthConfig, CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let auth_config = AuthConfig::from_env()?;
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod auth;
pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use auth::{AuthConfig, AuthScheme};
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::{Environment, ServerConfig, StoreBackend};

/// Reads a boolean flag, accepting `true`/`1` (case-insensitive) as set.
pub(crate) fn env_flag(name: &str, default: bool) -> bool {
    std::env::var(name)
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(default)
}
