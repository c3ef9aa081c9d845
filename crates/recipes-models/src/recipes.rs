//! Recipe domain models and DTOs.
//!
//! A [`Recipe`] is what the API returns and what the list cache stores.
//! Clients send a [`RecipeDto`] for both create and update; the identifier
//! and `published_at` timestamp are always assigned server-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Minimum length of the `tag` query parameter on search.
pub const MIN_SEARCH_TAG_LENGTH: u64 = 3;

/// A stored recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    /// Store-assigned identifier (24 hex characters).
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[schema(example = "Chocolate Chip Cookies")]
    pub name: String,
    #[schema(example = json!(["dessert", "snack"]))]
    pub tags: Vec<String>,
    #[schema(example = json!(["2 1/4 cups all-purpose flour", "1 cup butter"]))]
    pub ingredients: Vec<String>,
    #[schema(example = json!(["Mix dry ingredients", "Bake for 9 to 11 minutes"]))]
    pub instructions: Vec<String>,
    pub published_at: DateTime<Utc>,
}

/// Body of `POST /recipes` and `PUT /recipes/{id}`.
///
/// All four fields must be present. `name`, `ingredients`, and `instructions`
/// must be non-empty; `tags` may be an empty list.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct RecipeDto {
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[schema(example = "Chocolate Chip Cookies")]
    pub name: String,
    #[schema(example = json!(["dessert", "snack"]))]
    pub tags: Vec<String>,
    #[validate(length(min = 1, message = "ingredients must not be empty"))]
    #[schema(example = json!(["flour", "sugar"]))]
    pub ingredients: Vec<String>,
    #[validate(length(min = 1, message = "instructions must not be empty"))]
    #[schema(example = json!(["mix", "bake"]))]
    pub instructions: Vec<String>,
}

impl From<RecipeDto> for NewRecipe {
    fn from(dto: RecipeDto) -> Self {
        Self {
            name: dto.name,
            tags: dto.tags,
            ingredients: dto.ingredients,
            instructions: dto.instructions,
            published_at: Utc::now(),
        }
    }
}

/// A recipe that has not been assigned an identifier yet.
///
/// This is the shape of entries in the seed fixture; a missing
/// `published_at` defaults to the time of loading. It holds the same non-empty rules as [`RecipeDto`], so seeded recipes meet
/// the invariants of ones created over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewRecipe {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub tags: Vec<String>,
    #[validate(length(min = 1, message = "ingredients must not be empty"))]
    pub ingredients: Vec<String>,
    #[validate(length(min = 1, message = "instructions must not be empty"))]
    pub instructions: Vec<String>,
    #[serde(default = "Utc::now")]
    pub published_at: DateTime<Utc>,
}

impl NewRecipe {
    pub fn with_id(self, id: String) -> Recipe {
        Recipe {
            id,
            name: self.name,
            tags: self.tags,
            ingredients: self.ingredients,
            instructions: self.instructions,
            published_at: self.published_at,
        }
    }
}

/// Query parameters for `GET /recipes/search`.
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TagSearchParams {
    /// Tag to search for (at least 3 characters).
    #[validate(length(min = MIN_SEARCH_TAG_LENGTH, message = "tag must be at least 3 characters long"))]
    pub tag: String,
}

/// Response of the list and search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListRecipesResponse {
    pub count: usize,
    pub data: Vec<Recipe>,
}

impl From<Vec<Recipe>> for ListRecipesResponse {
    fn from(data: Vec<Recipe>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Result of a successful insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InsertResult {
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f6")]
    pub inserted_id: String,
}

/// Result of a successful update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateResult {
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Result of a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteResult {
    pub deleted_count: u64,
}
