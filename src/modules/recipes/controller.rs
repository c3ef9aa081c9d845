use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use recipes_core::{AppError, ErrorResponse};
use recipes_models::{
    DeleteResult, InsertResult, ListRecipesResponse, Recipe, RecipeDto, TagSearchParams,
    UpdateResult,
};

use crate::middleware::auth::AuthUser;
use crate::modules::recipes::service::RecipeService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedQuery};

#[utoipa::path(
    get,
    path = "/recipes",
    responses(
        (status = 200, description = "All recipes", body = ListRecipesResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "Recipes"
)]
#[instrument(skip(state))]
pub async fn list_recipes(
    State(state): State<AppState>,
) -> Result<Json<ListRecipesResponse>, AppError> {
    let recipes = RecipeService::list_recipes(state.recipes.as_ref(), &state.cache).await?;

    Ok(Json(recipes.into()))
}

#[utoipa::path(
    post,
    path = "/recipes",
    request_body = RecipeDto,
    responses(
        (status = 201, description = "Recipe created", body = InsertResult),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Recipes",
    security(("bearer_auth" = []), ("api_key" = []))
)]
#[instrument(skip(state, user, dto), fields(caller = %user.subject()))]
pub async fn create_recipe(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(dto): ValidatedJson<RecipeDto>,
) -> Result<(StatusCode, Json<InsertResult>), AppError> {
    let result =
        RecipeService::create_recipe(state.recipes.as_ref(), &state.cache, dto).await?;

    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    get,
    path = "/recipes/{id}",
    params(
        ("id" = String, Path, description = "Recipe ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Recipe details", body = Recipe),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    tag = "Recipes",
    security(("bearer_auth" = []), ("api_key" = []))
)]
#[instrument(skip(state, _user))]
pub async fn get_recipe(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, AppError> {
    let recipe = RecipeService::get_recipe(state.recipes.as_ref(), &id).await?;

    Ok(Json(recipe))
}

#[utoipa::path(
    put,
    path = "/recipes/{id}",
    params(
        ("id" = String, Path, description = "Recipe ID (24 hex characters)")
    ),
    request_body = RecipeDto,
    responses(
        (status = 200, description = "Recipe replaced", body = UpdateResult),
        (status = 400, description = "Malformed id or invalid input", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    tag = "Recipes",
    security(("bearer_auth" = []), ("api_key" = []))
)]
#[instrument(skip(state, user, dto), fields(caller = %user.subject()))]
pub async fn update_recipe(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<RecipeDto>,
) -> Result<Json<UpdateResult>, AppError> {
    let result =
        RecipeService::update_recipe(state.recipes.as_ref(), &state.cache, &id, dto).await?;

    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    params(
        ("id" = String, Path, description = "Recipe ID (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Recipe deleted", body = DeleteResult),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    tag = "Recipes",
    security(("bearer_auth" = []), ("api_key" = []))
)]
#[instrument(skip(state, user), fields(caller = %user.subject()))]
pub async fn delete_recipe(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = RecipeService::delete_recipe(state.recipes.as_ref(), &state.cache, &id).await?;

    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/recipes/search",
    params(TagSearchParams),
    responses(
        (status = 200, description = "Recipes carrying the tag", body = ListRecipesResponse),
        (status = 400, description = "Missing or too short tag", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Recipes",
    security(("bearer_auth" = []), ("api_key" = []))
)]
#[instrument(skip(state, _user))]
pub async fn search_recipes(
    State(state): State<AppState>,
    _user: AuthUser,
    ValidatedQuery(params): ValidatedQuery<TagSearchParams>,
) -> Result<Json<ListRecipesResponse>, AppError> {
    let recipes = RecipeService::search_by_tag(state.recipes.as_ref(), &params.tag).await?;

    Ok(Json(recipes.into()))
}
