use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::NewIngredient;
use crate::store;
use crate::types::{IngredientPayload, IngredientResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

#[utoipa::path(
    put,
    path = "/ingredients/{id}",
    tag = "ingredients",
    params(
        ("id" = i32, Path, description = "Ingredient id")
    ),
    request_body = IngredientPayload,
    responses(
        (status = 200, description = "Ingredient updated successfully", body = IngredientResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Ingredient not found", body = ErrorResponse)
    )
)]
pub async fn update_ingredient(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
    Json(payload): Json<IngredientPayload>,
) -> impl IntoResponse {
    if payload.name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Ingredient name cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    let mut conn = get_conn!(pool);

    // Every stored field is replaced; the path id locates the row and the
    // primary key itself is never rewritten.
    let new_ingredient = NewIngredient {
        id: payload.id,
        name: &payload.name,
        unit: &payload.unit,
        quantity: payload.quantity,
        status: payload.status,
    };

    match store::ingredients::update(&mut conn, id, &new_ingredient) {
        Ok(Some(ingredient)) => {
            (StatusCode::OK, Json(IngredientResponse::from(ingredient))).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Ingredient not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to update ingredient: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update ingredient".to_string(),
                }),
            )
                .into_response()
        }
    }
}
