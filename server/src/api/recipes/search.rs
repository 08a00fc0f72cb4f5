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
    path = "/recipes/search/{name}",
    tag = "recipes",
    params(
        ("name" = String, Path, description = "Substring of the recipe name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Active recipes whose name matches", body = [RecipeResponse])
    )
)]
pub async fn search_recipes(
    State(pool): State<Arc<DbPool>>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match store::recipes::search_by_name(&mut conn, &name) {
        Ok(rows) => {
            let recipes: Vec<RecipeResponse> =
                rows.into_iter().map(RecipeResponse::from).collect();
            (StatusCode::OK, Json(recipes)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to search recipes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to search recipes".to_string(),
                }),
            )
                .into_response()
        }
    }
}
