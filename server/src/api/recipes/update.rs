use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::NewRecipe;
use crate::store;
use crate::types::{RecipePayload, RecipeResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

#[utoipa::path(
    put,
    path = "/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i32, Path, description = "Recipe id")
    ),
    request_body = RecipePayload,
    responses(
        (status = 200, description = "Recipe updated successfully", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
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

    // Every stored field is replaced; the path id locates the row and the
    // primary key itself is never rewritten.
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

    match store::recipes::update(&mut conn, id, &new_recipe) {
        Ok(Some(recipe)) => (StatusCode::OK, Json(RecipeResponse::from(recipe))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to update recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
