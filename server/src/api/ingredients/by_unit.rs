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
    path = "/ingredients/unit/{unit}",
    tag = "ingredients",
    params(
        ("unit" = String, Path, description = "Unit to match, case-insensitive")
    ),
    responses(
        (status = 200, description = "Active ingredients measured in the unit", body = [IngredientResponse])
    )
)]
pub async fn ingredients_by_unit(
    State(pool): State<Arc<DbPool>>,
    Path(unit): Path<String>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match store::ingredients::by_unit(&mut conn, &unit) {
        Ok(rows) => {
            let ingredients: Vec<IngredientResponse> =
                rows.into_iter().map(IngredientResponse::from).collect();
            (StatusCode::OK, Json(ingredients)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to filter ingredients by unit: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to filter ingredients".to_string(),
                }),
            )
                .into_response()
        }
    }
}
