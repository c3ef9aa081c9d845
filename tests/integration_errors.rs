mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::json;

use recipes::recipes_config::Environment;
use recipes::recipes_db::{RecipeStore, StoreError};
use recipes::recipes_models::{DeleteResult, InsertResult, NewRecipe, Recipe, UpdateResult};

use common::{empty_request, setup_with};

/// Fails every call, or panics on reads when `panic` is set.
struct BrokenStore {
    panic: bool,
}

impl BrokenStore {
    fn fail(&self) -> StoreError {
        if self.panic {
            panic!("store exploded");
        }
        StoreError::Serialization("corrupt document".to_string())
    }
}

#[async_trait]
impl RecipeStore for BrokenStore {
    async fn list_all(&self) -> Result<Vec<Recipe>, StoreError> {
        Err(self.fail())
    }

    async fn get_by_id(&self, _id: &str) -> Result<Recipe, StoreError> {
        Err(self.fail())
    }

    async fn create(&self, _recipe: NewRecipe) -> Result<InsertResult, StoreError> {
        Err(self.fail())
    }

    async fn update_by_id(
        &self,
        _id: &str,
        _recipe: NewRecipe,
    ) -> Result<UpdateResult, StoreError> {
        Err(self.fail())
    }

    async fn delete_by_id(&self, _id: &str) -> Result<DeleteResult, StoreError> {
        Err(self.fail())
    }

    async fn find_by_tag(&self, _tag: &str) -> Result<Vec<Recipe>, StoreError> {
        Err(self.fail())
    }

    async fn insert_many(&self, _recipes: Vec<NewRecipe>) -> Result<usize, StoreError> {
        Err(self.fail())
    }
}

fn broken(panic: bool, environment: Environment) -> common::TestApp {
    setup_with(|state| {
        state.recipes = Arc::new(BrokenStore { panic });
        state.server_config.environment = environment;
    })
}

#[tokio::test]
async fn test_store_failure_is_500_with_details_in_development() {
    let app = broken(false, Environment::Development);

    let (status, body) = app.send(empty_request("GET", "/recipes", None)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Serialization error: corrupt document");
    assert!(!app.list_is_cached().await);
}

#[tokio::test]
async fn test_store_failure_is_masked_in_production() {
    let app = broken(false, Environment::Production);

    let (status, body) = app.send(empty_request("GET", "/recipes", None)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal Server Error" }));
}

#[tokio::test]
async fn test_panic_becomes_500_in_development() {
    let app = broken(true, Environment::Development);

    let (status, body) = app.send(empty_request("GET", "/recipes", None)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "An unexpected error occurred: store exploded"
    );
}

#[tokio::test]
async fn test_panic_is_masked_in_production() {
    let app = broken(true, Environment::Production);

    let (status, body) = app.send(empty_request("GET", "/recipes", None)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal Server Error" }));
}

#[tokio::test]
async fn test_client_errors_are_not_masked_in_production() {
    let app = setup_with(|state| state.server_config.environment = Environment::Production);

    let (status, body) = app
        .send(empty_request("GET", "/recipes/search?tag=dessert", None))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Missing authorization header");
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_with(|_| {});

    let (status, body) = app.send(empty_request("GET", "/health", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_with(|_| {});

    let (status, body) = app
        .send(empty_request("GET", "/api-docs/openapi.json", None))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Recipes API");
    assert!(body["paths"]["/recipes/{id}"].is_object());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = setup_with(|_| {});

    let (status, _) = app.send(empty_request("GET", "/nope", None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
