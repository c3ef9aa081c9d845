use tracing::{info, instrument};

use recipes_cache::RecipeCache;
use recipes_core::AppError;
use recipes_db::RecipeStore;
use recipes_models::{DeleteResult, InsertResult, NewRecipe, Recipe, RecipeDto, UpdateResult};
use recipes_observability::{
    track_cache_hit, track_cache_miss, track_recipe_created, track_recipe_deleted,
    track_recipe_updated,
};

pub struct RecipeService;

impl RecipeService {
    /// Cache-aside read of the full list.
    #[instrument(skip(store))]
    pub async fn list_recipes(
        store: &dyn RecipeStore,
        cache: &RecipeCache,
    ) -> Result<Vec<Recipe>, AppError> {
        if let Some(recipes) = cache.get_cached_list().await {
            track_cache_hit();
            return Ok(recipes);
        }

        if cache.is_enabled() {
            track_cache_miss();
        }

        let recipes = store.list_all().await?;
        cache.set_cached_list(&recipes).await;

        Ok(recipes)
    }

    #[instrument(skip(store, dto), fields(name = %dto.name))]
    pub async fn create_recipe(
        store: &dyn RecipeStore,
        cache: &RecipeCache,
        dto: RecipeDto,
    ) -> Result<InsertResult, AppError> {
        let result = store.create(NewRecipe::from(dto)).await?;
        cache.invalidate().await;
        track_recipe_created();

        info!(id = %result.inserted_id, "Recipe created");
        Ok(result)
    }

    #[instrument(skip(store))]
    pub async fn get_recipe(store: &dyn RecipeStore, id: &str) -> Result<Recipe, AppError> {
        Ok(store.get_by_id(id).await?)
    }

    /// Replaces the recipe and refreshes `published_at`.
    #[instrument(skip(store, dto))]
    pub async fn update_recipe(
        store: &dyn RecipeStore,
        cache: &RecipeCache,
        id: &str,
        dto: RecipeDto,
    ) -> Result<UpdateResult, AppError> {
        let result = store.update_by_id(id, NewRecipe::from(dto)).await?;
        cache.invalidate().await;
        track_recipe_updated();

        info!(%id, "Recipe updated");
        Ok(result)
    }

    #[instrument(skip(store))]
    pub async fn delete_recipe(
        store: &dyn RecipeStore,
        cache: &RecipeCache,
        id: &str,
    ) -> Result<DeleteResult, AppError> {
        let result = store.delete_by_id(id).await?;
        cache.invalidate().await;
        track_recipe_deleted();

        info!(%id, "Recipe deleted");
        Ok(result)
    }

    #[instrument(skip(store))]
    pub async fn search_by_tag(
        store: &dyn RecipeStore,
        tag: &str,
    ) -> Result<Vec<Recipe>, AppError> {
        Ok(store.find_by_tag(tag).await?)
    }
}
