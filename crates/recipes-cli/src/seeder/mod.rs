//! Data seeding for development and testing.

mod recipes;
mod users;

pub use recipes::{generate_recipes, seed_recipes};
pub use users::create_user;
