#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use recipes::recipes_cache::{InMemoryCache, RecipeCache};
use recipes::recipes_config::{AuthConfig, JwtConfig};
use recipes::router::init_router;
use recipes::state::AppState;

pub const TEST_API_KEY: &str = "test-api-key";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub cache: Arc<InMemoryCache>,
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    pub async fn list_is_cached(&self) -> bool {
        self.cache.contains(self.state.cache.key()).await
    }

    /// Registers a user and returns a fresh token for it.
    pub async fn token_for(&self, username: &str, password: &str) -> String {
        let credentials = json!({ "username": username, "password": password });

        let (status, _) = self
            .send(json_request("POST", "/auth/signup", &credentials, None))
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = self
            .send(json_request("POST", "/auth/signin", &credentials, None))
            .await;
        assert_eq!(status, StatusCode::OK);

        body["token"].as_str().unwrap().to_string()
    }
}

fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-key-at-least-32-characters-long".to_string(),
        expiration_seconds: 600,
        issuer: "recipes-api".to_string(),
    }
}

/// In-memory stores, an enabled in-memory cache, and bearer-token auth.
pub fn setup_test_app() -> TestApp {
    setup_with(|_| {})
}

/// Same as [`setup_test_app`] but guarded by a static API key.
pub fn setup_api_key_app() -> TestApp {
    setup_with(|state| state.auth_config = AuthConfig::api_key(TEST_API_KEY))
}

pub fn setup_with(configure: impl FnOnce(&mut AppState)) -> TestApp {
    let cache = Arc::new(InMemoryCache::new());

    let mut state = AppState::in_memory();
    state.cache = RecipeCache::new(Some(cache.clone()), true, "test");
    state.jwt_config = test_jwt_config();
    configure(&mut state);

    TestApp {
        router: init_router(state.clone()),
        state,
        cache,
    }
}

pub fn json_request(method: &str, uri: &str, body: &Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    builder
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    builder.body(Body::empty()).unwrap()
}

pub fn cookies() -> Value {
    json!({
        "name": "Chocolate Chip Cookies",
        "tags": ["dessert", "snack"],
        "ingredients": ["2 1/4 cups all-purpose flour", "1 cup butter", "2 cups chocolate chips"],
        "instructions": ["Mix dry ingredients", "Fold in chips", "Bake for 9 to 11 minutes"]
    })
}

pub fn soup() -> Value {
    json!({
        "name": "Tomato Soup",
        "tags": ["dinner", "vegetarian"],
        "ingredients": ["tomatoes", "onion", "stock"],
        "instructions": ["Sweat the onion", "Add tomatoes and stock", "Simmer and blend"]
    })
}
