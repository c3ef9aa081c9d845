//! # Recipes Models
//!
//! Domain models and DTOs for the Recipes API.
//!
//! Every request and response body is a typed struct with a `utoipa` schema,
//! so the wire contract is explicit and shows up in the OpenAPI document.
//!
//! # Modules
//!
//! - [`auth`]: Sign-up/sign-in requests and token responses
//! - [`recipes`]: Recipe entity, input DTO, search parameters, and write results
//! - [`users`]: Stored user record and its public projection
//!
//! # Example
//!
//! ```ignore
//! use recipes_models::recipes::{Recipe, RecipeDto, ListRecipesResponse};
//!
//! let response = ListRecipesResponse::from(recipes);
//! assert_eq!(response.count, response.data.len());
//! ```

pub mod auth;
pub mod recipes;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{CredentialsRequest, TokenResponse};
pub use recipes::{
    DeleteResult, InsertResult, ListRecipesResponse, NewRecipe, Recipe, RecipeDto,
    TagSearchParams, UpdateResult,
};
pub use users::{User, UserResponse};
