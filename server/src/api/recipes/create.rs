use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::NewRecipe;
use crate::store;
use crate::types::{RecipePayload, RecipeResponse};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipes",
    request_body = RecipePayload,
    responses(
        (status = 200, description = "Recipe created successfully", body = RecipeResponse),
        (status = 400, description = "Invalid request or duplicate id", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(pool): State<Arc<DbPool>>,
    Json(payload): Json<RecipePayload>,
) -> impl IntoResponse {
    if payload.name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Recipe name cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    let mut conn = get_conn!(pool);

    let ingredients: Vec<Option<String>> = payload.ingredients.iter().cloned().map(Some).collect();
    let new_recipe = NewRecipe {
        id: payload.id,
        name: &payload.name,
        prep_time_minutes: payload.prep_time_minutes,
        servings: payload.servings,
        category: &payload.category,
        ingredients: &ingredients,
        instructions: &payload.instructions,
        status: payload.status,
    };

    // Insert-if-absent; a duplicate id falls out as None rather than racing
    // a separate existence check.
    match store::recipes::create(&mut conn, &new_recipe) {
        Ok(Some(recipe)) => (StatusCode::OK, Json(RecipeResponse::from(recipe))).into_response(),
        Ok(None) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "A recipe with that id already exists".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to create recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
