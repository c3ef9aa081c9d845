//! # Recipes Auth
//!
//! Token claims and JWT utilities for the Recipes API.
//!
//! - [`claims`]: The claim set carried by every bearer token
//! - [`jwt`]: Token issuance, verification, and refresh
//!
//! Tokens are stateless: validity is decided by signature, issuer, and
//! expiry alone. A token whose `exp` equals the current second is already
//! expired.
//!
//! # Example
//!
//! ```ignore
//! use recipes_auth::{create_token, refresh_token, verify_token};
//! use recipes_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//!
//! let issued = create_token("chef", &config)?;
//! let claims = verify_token(&issued.token, &config)?;
//! assert_eq!(claims.sub, "chef");
//!
//! let renewed = refresh_token(&issued.token, &config)?;
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{
    IssuedToken, create_token, create_token_at, refresh_token, refresh_token_at, verify_token,
    verify_token_at,
};
