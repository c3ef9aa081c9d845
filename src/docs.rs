use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use recipes_config::auth::API_KEY_HEADER;
use recipes_core::ErrorResponse;
use recipes_models::{
    CredentialsRequest, DeleteResult, InsertResult, ListRecipesResponse, Recipe, RecipeDto,
    TokenResponse, UpdateResult, UserResponse,
};

use crate::modules::health::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::recipes::controller::list_recipes,
        crate::modules::recipes::controller::create_recipe,
        crate::modules::recipes::controller::get_recipe,
        crate::modules::recipes::controller::update_recipe,
        crate::modules::recipes::controller::delete_recipe,
        crate::modules::recipes::controller::search_recipes,
        crate::modules::auth::controller::sign_up,
        crate::modules::auth::controller::sign_in,
        crate::modules::auth::controller::refresh,
        crate::modules::health::health_check,
    ),
    components(
        schemas(
            Recipe,
            RecipeDto,
            ListRecipesResponse,
            InsertResult,
            UpdateResult,
            DeleteResult,
            CredentialsRequest,
            TokenResponse,
            UserResponse,
            ErrorResponse,
            HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Recipes", description = "Recipe catalogue endpoints"),
        (name = "Authentication", description = "User sign-up, sign-in and token refresh"),
        (name = "Health", description = "Liveness probe")
    ),
    info(
        title = "Recipes API",
        version = "0.1.0",
        description = "A recipe catalogue REST API built with Rust, Axum, and MongoDB, with an optional Redis cache and JWT or API key authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER))),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/recipes",
            "/recipes/{id}",
            "/recipes/search",
            "/auth/signup",
            "/auth/signin",
            "/auth/refresh",
            "/health",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_security_schemes_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
        assert!(components.security_schemes.contains_key("api_key"));
    }
}
