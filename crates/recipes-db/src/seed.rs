//! Seeding the recipe store from a JSON fixture.
//!
//! The fixture is a JSON array of recipes without identifiers:
//!
//! ```json
//! [
//!   {
//!     "name": "Chocolate Chip Cookies",
//!     "tags": ["dessert", "snack"],
//!     "ingredients": ["2 1/4 cups all-purpose flour"],
//!     "instructions": ["Bake for 9 to 11 minutes"],
//!     "published_at": "2023-03-10T15:04:05Z"
//!   }
//! ]
//! ```

use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};
use validator::Validate;

use recipes_models::NewRecipe;

use crate::recipes::RecipeStore;

/// Reads and parses the fixture file.
///
/// Every entry must pass the same validation as a recipe created over HTTP;
/// the first invalid entry fails the whole load.
pub fn load_fixture(path: &Path) -> anyhow::Result<Vec<NewRecipe>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture {}", path.display()))?;

    let recipes: Vec<NewRecipe> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse fixture {}", path.display()))?;

    for (index, recipe) in recipes.iter().enumerate() {
        recipe.validate().with_context(|| {
            format!("Invalid fixture entry {index} in {}", path.display())
        })?;
    }

    Ok(recipes)
}

/// Loads the fixture at `path` and bulk-inserts it.
pub async fn seed_from_fixture(store: &dyn RecipeStore, path: &Path) -> anyhow::Result<usize> {
    let recipes = load_fixture(path)?;

    if recipes.is_empty() {
        warn!(fixture = %path.display(), "Fixture contains no recipes");
        return Ok(0);
    }

    let inserted = store
        .insert_many(recipes)
        .await
        .context("Failed to insert fixture recipes")?;

    info!(inserted, fixture = %path.display(), "Seeded recipes");
    Ok(inserted)
}
