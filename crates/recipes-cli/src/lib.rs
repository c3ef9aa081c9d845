//! # Recipes CLI
//!
//! Seeding and administration utilities for the Recipes API.
//!
//! This library crate provides the functionality used by the CLI binary. It
//! works against the store traits, so everything here also runs against the
//! in-memory stores.
//!
//! ## Usage
//!
//! ```ignore
//! use recipes_cli::seeder;
//!
//! let recipes = seeder::generate_recipes(50);
//! seeder::seed_recipes(&store, &cache, recipes).await?;
//! ```

pub mod seeder;
