use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::NewIngredient;
use crate::store;
use crate::types::{IngredientPayload, IngredientResponse};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/ingredients",
    tag = "ingredients",
    request_body = IngredientPayload,
    responses(
        (status = 200, description = "Ingredient created successfully", body = IngredientResponse),
        (status = 400, description = "Invalid request or duplicate id", body = ErrorResponse)
    )
)]
pub async fn create_ingredient(
    State(pool): State<Arc<DbPool>>,
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

    let new_ingredient = NewIngredient {
        id: payload.id,
        name: &payload.name,
        unit: &payload.unit,
        quantity: payload.quantity,
        status: payload.status,
    };

    // Insert-if-absent; a duplicate id falls out as None rather than racing
    // a separate existence check.
    match store::ingredients::create(&mut conn, &new_ingredient) {
        Ok(Some(ingredient)) => {
            (StatusCode::OK, Json(IngredientResponse::from(ingredient))).into_response()
        }
        Ok(None) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "An ingredient with that id already exists".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to create ingredient: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create ingredient".to_string(),
                }),
            )
                .into_response()
        }
    }
}
