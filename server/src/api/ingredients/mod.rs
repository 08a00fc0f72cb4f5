pub mod by_unit;
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

/// Returns the router for ingredient endpoints (mounted at /ingredients)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_ingredients).post(create::create_ingredient))
        .route("/unit/{unit}", get(by_unit::ingredients_by_unit))
        .route("/search/{name}", get(search::search_ingredients))
        .route(
            "/{id}",
            get(get::get_ingredient)
                .put(update::update_ingredient)
                .delete(delete::delete_ingredient),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_ingredient,
        list::list_ingredients,
        get::get_ingredient,
        update::update_ingredient,
        delete::delete_ingredient,
        by_unit::ingredients_by_unit,
        search::search_ingredients,
    ),
    components(schemas(
        crate::types::IngredientPayload,
        crate::types::IngredientResponse,
        delete::DeleteIngredientResponse,
    ))
)]
pub struct ApiDoc;
