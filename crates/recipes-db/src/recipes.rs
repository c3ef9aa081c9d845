//! Recipe store adapters.
//!
//! [`RecipeStore`] is the seam between request handlers and storage. Both
//! adapters assign ObjectId identifiers, so a malformed id is rejected the
//! same way regardless of backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use mongodb::bson::{doc, oid::ObjectId, to_document};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use recipes_models::{DeleteResult, InsertResult, NewRecipe, Recipe, UpdateResult};

use crate::error::StoreError;
use crate::mongo::{Database, RECIPES_COLLECTION};

#[async_trait]
pub trait RecipeStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Recipe>, StoreError>;

    async fn get_by_id(&self, id: &str) -> Result<Recipe, StoreError>;

    async fn create(&self, recipe: NewRecipe) -> Result<InsertResult, StoreError>;

    /// Replaces every mutable field of the recipe. `NotFound` when no
    /// recipe has this id; nothing is created in that case.
    async fn update_by_id(&self, id: &str, recipe: NewRecipe)
    -> Result<UpdateResult, StoreError>;

    async fn delete_by_id(&self, id: &str) -> Result<DeleteResult, StoreError>;

    /// Recipes whose `tags` contain `tag` exactly.
    async fn find_by_tag(&self, tag: &str) -> Result<Vec<Recipe>, StoreError>;

    /// Bulk insert used for seeding. Returns the number of inserted recipes.
    async fn insert_many(&self, recipes: Vec<NewRecipe>) -> Result<usize, StoreError>;
}

/// Parses a 24-character hex identifier.
pub fn parse_object_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}

/// Recipe as stored in the `recipes` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecipeDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    tags: Vec<String>,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    published_at: DateTime<Utc>,
}

/// Body of the `$set` on update: every field except `_id`.
#[derive(Debug, Clone, Serialize)]
struct RecipeUpdate {
    name: String,
    tags: Vec<String>,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    published_at: DateTime<Utc>,
}

impl From<NewRecipe> for RecipeUpdate {
    fn from(recipe: NewRecipe) -> Self {
        Self {
            name: recipe.name,
            tags: recipe.tags,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            published_at: recipe.published_at,
        }
    }
}

impl RecipeDocument {
    fn new(id: ObjectId, recipe: NewRecipe) -> Self {
        Self {
            id,
            name: recipe.name,
            tags: recipe.tags,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            published_at: recipe.published_at,
        }
    }
}

impl From<RecipeDocument> for Recipe {
    fn from(doc: RecipeDocument) -> Self {
        Recipe {
            id: doc.id.to_hex(),
            name: doc.name,
            tags: doc.tags,
            ingredients: doc.ingredients,
            instructions: doc.instructions,
            published_at: doc.published_at,
        }
    }
}

pub struct MongoRecipeStore {
    collection: Collection<RecipeDocument>,
}

impl MongoRecipeStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(RECIPES_COLLECTION),
        }
    }
}

#[async_trait]
impl RecipeStore for MongoRecipeStore {
    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Recipe>, StoreError> {
        let docs: Vec<RecipeDocument> = self.collection.find(doc! {}).await?.try_collect().await?;
        Ok(docs.into_iter().map(Recipe::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> Result<Recipe, StoreError> {
        let oid = parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": oid })
            .await?
            .map(Recipe::from)
            .ok_or(StoreError::NotFound("Recipe"))
    }

    #[instrument(skip(self, recipe), fields(name = %recipe.name))]
    async fn create(&self, recipe: NewRecipe) -> Result<InsertResult, StoreError> {
        let id = ObjectId::new();
        self.collection
            .insert_one(RecipeDocument::new(id, recipe))
            .await?;

        Ok(InsertResult {
            inserted_id: id.to_hex(),
        })
    }

    #[instrument(skip(self, recipe))]
    async fn update_by_id(
        &self,
        id: &str,
        recipe: NewRecipe,
    ) -> Result<UpdateResult, StoreError> {
        let oid = parse_object_id(id)?;
        let update = doc! { "$set": to_document(&RecipeUpdate::from(recipe))? };

        let result = self
            .collection
            .update_one(doc! { "_id": oid }, update)
            .await?;

        if result.matched_count == 0 {
            return Err(StoreError::NotFound("Recipe"));
        }

        Ok(UpdateResult {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> Result<DeleteResult, StoreError> {
        let oid = parse_object_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;

        if result.deleted_count == 0 {
            return Err(StoreError::NotFound("Recipe"));
        }

        Ok(DeleteResult {
            deleted_count: result.deleted_count,
        })
    }

    #[instrument(skip(self))]
    async fn find_by_tag(&self, tag: &str) -> Result<Vec<Recipe>, StoreError> {
        let docs: Vec<RecipeDocument> = self
            .collection
            .find(doc! { "tags": tag })
            .await?
            .try_collect()
            .await?;

        Ok(docs.into_iter().map(Recipe::from).collect())
    }

    #[instrument(skip(self, recipes), fields(count = recipes.len()))]
    async fn insert_many(&self, recipes: Vec<NewRecipe>) -> Result<usize, StoreError> {
        if recipes.is_empty() {
            return Ok(0);
        }

        let docs: Vec<RecipeDocument> = recipes
            .into_iter()
            .map(|recipe| RecipeDocument::new(ObjectId::new(), recipe))
            .collect();

        let result = self.collection.insert_many(docs).await?;
        Ok(result.inserted_ids.len())
    }
}

/// Process-local recipe store. The list is shared across request tasks and
/// only mutated under the write lock.
#[derive(Debug, Default)]
pub struct InMemoryRecipeStore {
    recipes: RwLock<Vec<Recipe>>,
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.recipes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.recipes.read().await.is_empty()
    }
}

#[async_trait]
impl RecipeStore for InMemoryRecipeStore {
    async fn list_all(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(self.recipes.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Recipe, StoreError> {
        let id = parse_object_id(id)?.to_hex();

        self.recipes
            .read()
            .await
            .iter()
            .find(|recipe| recipe.id == id)
            .cloned()
            .ok_or(StoreError::NotFound("Recipe"))
    }

    async fn create(&self, recipe: NewRecipe) -> Result<InsertResult, StoreError> {
        let id = ObjectId::new().to_hex();
        self.recipes.write().await.push(recipe.with_id(id.clone()));
        debug!(%id, "Inserted recipe in memory");

        Ok(InsertResult { inserted_id: id })
    }

    async fn update_by_id(
        &self,
        id: &str,
        recipe: NewRecipe,
    ) -> Result<UpdateResult, StoreError> {
        let id = parse_object_id(id)?.to_hex();
        let mut recipes = self.recipes.write().await;

        let slot = recipes
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or(StoreError::NotFound("Recipe"))?;

        let updated = recipe.with_id(id);
        let modified_count = u64::from(*slot != updated);
        *slot = updated;

        Ok(UpdateResult {
            matched_count: 1,
            modified_count,
        })
    }

    async fn delete_by_id(&self, id: &str) -> Result<DeleteResult, StoreError> {
        let id = parse_object_id(id)?.to_hex();
        let mut recipes = self.recipes.write().await;

        let position = recipes
            .iter()
            .position(|recipe| recipe.id == id)
            .ok_or(StoreError::NotFound("Recipe"))?;
        recipes.remove(position);

        Ok(DeleteResult { deleted_count: 1 })
    }

    async fn find_by_tag(&self, tag: &str) -> Result<Vec<Recipe>, StoreError> {
        Ok(self
            .recipes
            .read()
            .await
            .iter()
            .filter(|recipe| recipe.tags.iter().any(|t| t == tag))
            .cloned()
            .collect())
    }

    async fn insert_many(&self, recipes: Vec<NewRecipe>) -> Result<usize, StoreError> {
        let count = recipes.len();
        let mut stored = self.recipes.write().await;
        stored.extend(
            recipes
                .into_iter()
                .map(|recipe| recipe.with_id(ObjectId::new().to_hex())),
        );

        Ok(count)
    }
}
