//! Fake recipe generation.

use std::time::Instant;

use anyhow::Context;
use chrono::{DateTime, Utc};
use fake::Fake;
use fake::faker::chrono::en::DateTimeBefore;
use fake::faker::lorem::en::{Sentence, Word, Words};
use validator::Validate;

use recipes_cache::RecipeCache;
use recipes_db::RecipeStore;
use recipes_models::NewRecipe;

const TAGS: &[&str] = &[
    "breakfast",
    "lunch",
    "dinner",
    "dessert",
    "snack",
    "vegan",
    "vegetarian",
    "quick",
    "baking",
    "soup",
];

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn generate_recipe() -> NewRecipe {
    let name_words: Vec<String> = Words(2..4).fake();
    let name = name_words
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ");

    let tag_count: usize = (1usize..4).fake();
    let mut tags: Vec<String> = Vec::with_capacity(tag_count);
    while tags.len() < tag_count {
        let tag = TAGS[(0..TAGS.len()).fake::<usize>()];
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }

    let ingredient_count: usize = (2usize..8).fake();
    let ingredients = (0..ingredient_count)
        .map(|_| {
            let amount: u8 = (1u8..5).fake();
            format!("{} cups {}", amount, Word().fake::<String>())
        })
        .collect();

    let step_count: usize = (2usize..6).fake();
    let instructions = (0..step_count)
        .map(|_| Sentence(3..8).fake::<String>())
        .collect();

    let published_at: DateTime<Utc> = DateTimeBefore(Utc::now()).fake();

    NewRecipe {
        name,
        tags,
        ingredients,
        instructions,
        published_at,
    }
}

/// Generates `count` random recipes that satisfy the create-request rules.
pub fn generate_recipes(count: usize) -> Vec<NewRecipe> {
    (0..count).map(|_| generate_recipe()).collect()
}

/// Validates and bulk-inserts recipes, then drops the cached list.
///
/// Nothing is inserted if any recipe is invalid.
pub async fn seed_recipes(
    store: &dyn RecipeStore,
    cache: &RecipeCache,
    recipes: Vec<NewRecipe>,
) -> anyhow::Result<usize> {
    for (index, recipe) in recipes.iter().enumerate() {
        recipe
            .validate()
            .with_context(|| format!("Recipe {index} is invalid"))?;
    }

    let start = Instant::now();
    println!("🌱 Seeding {} recipes...", recipes.len());

    let inserted = store.insert_many(recipes).await?;
    cache.invalidate().await;

    println!(
        "✅ Inserted {} recipes in {:.2?}",
        inserted,
        start.elapsed()
    );
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use recipes_cache::{CacheBackend, InMemoryCache};
    use recipes_db::InMemoryRecipeStore;

    const PREFIX: &str = "test";

    async fn primed_cache() -> (Arc<InMemoryCache>, RecipeCache) {
        let backend = Arc::new(InMemoryCache::new());
        let cache = RecipeCache::new(Some(backend.clone()), true, PREFIX);
        backend.set(cache.key(), "[]".to_string()).await.unwrap();
        (backend, cache)
    }

    #[test]
    fn test_generated_recipes_are_well_formed() {
        for recipe in generate_recipes(25) {
            assert!(!recipe.name.is_empty());
            assert!(!recipe.ingredients.is_empty());
            assert!(!recipe.instructions.is_empty());
            assert!(!recipe.tags.is_empty());
            assert!(recipe.tags.iter().all(|t| TAGS.contains(&t.as_str())));
            assert!(recipe.published_at <= Utc::now());
        }
    }

    #[test]
    fn test_generated_tags_are_unique_per_recipe() {
        for recipe in generate_recipes(25) {
            let mut tags = recipe.tags.clone();
            tags.sort();
            tags.dedup();
            assert_eq!(tags.len(), recipe.tags.len());
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("soup"), "Soup");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_generated_recipes_pass_validation() {
        for recipe in generate_recipes(25) {
            assert!(recipe.validate().is_ok());
        }
    }

    #[tokio::test]
    async fn test_seed_into_store() {
        let store = InMemoryRecipeStore::new();
        let inserted = seed_recipes(&store, &RecipeCache::disconnected(), generate_recipes(10))
            .await
            .unwrap();

        assert_eq!(inserted, 10);
        assert_eq!(store.len().await, 10);
    }

    #[tokio::test]
    async fn test_seed_invalidates_cached_list() {
        let store = InMemoryRecipeStore::new();
        let (backend, cache) = primed_cache().await;

        seed_recipes(&store, &cache, generate_recipes(3)).await.unwrap();

        assert!(!backend.contains(cache.key()).await);
    }

    #[tokio::test]
    async fn test_seed_rejects_invalid_recipe() {
        let store = InMemoryRecipeStore::new();
        let (backend, cache) = primed_cache().await;

        let mut recipes = generate_recipes(3);
        recipes[2].instructions.clear();

        let err = seed_recipes(&store, &cache, recipes).await.unwrap_err();
        assert!(err.to_string().contains("Recipe 2 is invalid"));
        assert!(store.is_empty().await);
        assert!(backend.contains(cache.key()).await);
    }
}
