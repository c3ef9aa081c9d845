//! # Recipes Core
//!
//! Core types and utilities shared by every crate of the Recipes API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: One-way password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use recipes_core::errors::AppError;
//! use recipes_core::password::{hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Recipe not found"));
//!
//! let hash = hash_password("secure_password")?;
//! assert!(verify_password("secure_password", &hash)?);
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse};
pub use password::{hash_password, verify_dummy_password, verify_password};
