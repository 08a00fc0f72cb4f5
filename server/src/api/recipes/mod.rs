pub mod by_category;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod search;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for recipe endpoints (mounted at /recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route(
            "/category/{category}",
            get(by_category::recipes_by_category),
        )
        .route("/search/{name}", get(search::search_recipes))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_recipe,
        list::list_recipes,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
        by_category::recipes_by_category,
        search::search_recipes,
    ),
    components(schemas(
        crate::types::RecipePayload,
        crate::types::RecipeResponse,
        delete::DeleteRecipeResponse,
    ))
)]
pub struct ApiDoc;
