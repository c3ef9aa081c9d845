mod common;

use std::path::Path;

use axum::http::StatusCode;

use recipes::recipes_db::load_fixture;
use recipes::state::seed_store;

use common::{empty_request, setup_test_app, setup_with};

#[test]
fn test_bundled_fixture_parses() {
    let recipes = load_fixture(Path::new("recipes.json")).unwrap();

    assert!(!recipes.is_empty());
    assert!(
        recipes
            .iter()
            .any(|recipe| recipe.name == "Chocolate Chip Cookies")
    );
}

#[tokio::test]
async fn test_seeded_recipes_are_listed() {
    let app = setup_test_app();

    // Prime the cache so the import has something to invalidate.
    app.send(empty_request("GET", "/recipes", None)).await;
    assert!(app.list_is_cached().await);

    let inserted = seed_store(&app.state).await.unwrap();
    assert!(inserted > 0);
    assert!(!app.list_is_cached().await);

    let (status, body) = app.send(empty_request("GET", "/recipes", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], inserted);
}

#[tokio::test]
async fn test_seed_with_missing_fixture_fails() {
    let app = setup_with(|state| {
        state.server_config.fixture_path = "does-not-exist.json".into();
    });

    let err = seed_store(&app.state).await.unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read fixture"));
}
