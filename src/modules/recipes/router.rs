use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_recipe, delete_recipe, get_recipe, list_recipes, search_recipes, update_recipe,
};

pub fn init_recipes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_recipes).post(create_recipe))
        .route("/search", get(search_recipes))
        .route(
            "/{id}",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
}
