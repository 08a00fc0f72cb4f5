use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::store;
use crate::types::IngredientResponse;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/ingredients",
    tag = "ingredients",
    responses(
        (status = 200, description = "All active ingredients", body = [IngredientResponse])
    )
)]
pub async fn list_ingredients(State(pool): State<Arc<DbPool>>) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match store::ingredients::list_active(&mut conn) {
        Ok(rows) => {
            let ingredients: Vec<IngredientResponse> =
                rows.into_iter().map(IngredientResponse::from).collect();
            (StatusCode::OK, Json(ingredients)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch ingredients: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch ingredients".to_string(),
                }),
            )
                .into_response()
        }
    }
}
