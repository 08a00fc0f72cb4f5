use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::store;
use crate::types::RecipeResponse;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All active recipes", body = [RecipeResponse])
    )
)]
pub async fn list_recipes(State(pool): State<Arc<DbPool>>) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match store::recipes::list_active(&mut conn) {
        Ok(rows) => {
            let recipes: Vec<RecipeResponse> =
                rows.into_iter().map(RecipeResponse::from).collect();
            (StatusCode::OK, Json(recipes)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch recipes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipes".to_string(),
                }),
            )
                .into_response()
        }
    }
}
