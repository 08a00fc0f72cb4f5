use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::store;
use crate::types::RecipeResponse;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/recipes/category/{category}",
    tag = "recipes",
    params(
        ("category" = String, Path, description = "Category to match, case-insensitive")
    ),
    responses(
        (status = 200, description = "Active recipes in the category", body = [RecipeResponse])
    )
)]
pub async fn recipes_by_category(
    State(pool): State<Arc<DbPool>>,
    Path(category): Path<String>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match store::recipes::by_category(&mut conn, &category) {
        Ok(rows) => {
            let recipes: Vec<RecipeResponse> =
                rows.into_iter().map(RecipeResponse::from).collect();
            (StatusCode::OK, Json(recipes)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to filter recipes by category: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to filter recipes".to_string(),
                }),
            )
                .into_response()
        }
    }
}
