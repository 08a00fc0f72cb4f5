use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::store;
use crate::types::IngredientResponse;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/ingredients/search/{name}",
    tag = "ingredients",
    params(
        ("name" = String, Path, description = "Substring of the ingredient name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Active ingredients whose name matches", body = [IngredientResponse])
    )
)]
pub async fn search_ingredients(
    State(pool): State<Arc<DbPool>>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match store::ingredients::search_by_name(&mut conn, &name) {
        Ok(rows) => {
            let ingredients: Vec<IngredientResponse> =
                rows.into_iter().map(IngredientResponse::from).collect();
            (StatusCode::OK, Json(ingredients)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to search ingredients: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to search ingredients".to_string(),
                }),
            )
                .into_response()
        }
    }
}
