//! # Recipes API
//!
//! A REST API built with Rust, Axum, and MongoDB for storing and searching
//! cooking recipes.
//!
//! ## Overview
//!
//! - **Recipes**: Create, read, update, delete, and search by tag
//! - **Caching**: Optional Redis cache-aside for the full recipe list
//! - **Authentication**: Per-user JWT bearer tokens, or a single static API key
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Auth extractor, error masking, panic handler
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Sign-up, sign-in, token refresh
//! │   ├── health/      # Liveness probe
//! │   └── recipes/     # Recipe CRUD and search
//! ├── docs.rs          # OpenAPI document
//! ├── router.rs        # Main application router
//! ├── state.rs         # Shared application state
//! └── validator.rs     # Validating JSON and query extractors
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `router.rs`: Axum router configuration
//!
//! Storage, caching, tokens, configuration, and observability live in the
//! `recipes-*` workspace crates.
//!
//! ## Request Flow
//!
//! ```text
//! request → handler → auth gate (protected routes) → cache (list only) → store
//! ```
//!
//! Every successful create, update, or delete removes the cached list, so a
//! list read after a write always reflects it.
//!
//! ## Quick Start
//!
//! ```bash
//! MONGO_URI=mongodb://localhost:27017
//! MONGO_DB_NAME=recipes
//! JWT_SECRET=your-secure-secret-key
//! REDIS_URI=localhost:6379
//! ENABLE_REDIS_CACHE=true
//! ```
//!
//! When the server is running, API documentation is available at:
//!
//! - Swagger UI: `http://localhost:8080/swagger-ui`
//! - Scalar: `http://localhost:8080/scalar`

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use recipes_auth;
pub use recipes_cache;
pub use recipes_config;
pub use recipes_core;
pub use recipes_db;
pub use recipes_models;
pub use recipes_observability;
