use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::store;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteIngredientResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/ingredients/{id}",
    tag = "ingredients",
    params(
        ("id" = i32, Path, description = "Ingredient id")
    ),
    responses(
        (status = 200, description = "Ingredient deleted successfully", body = DeleteIngredientResponse),
        (status = 404, description = "Ingredient not found", body = ErrorResponse)
    )
)]
pub async fn delete_ingredient(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    // Soft delete - flip status, keep the row
    let updated = match store::ingredients::soft_delete(&mut conn, id) {
        Ok(count) => count,
        Err(e) => {
            tracing::error!("Failed to delete ingredient: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to delete ingredient".to_string(),
                }),
            )
                .into_response();
        }
    };

    if updated == 0 {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Ingredient not found".to_string(),
            }),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        Json(DeleteIngredientResponse {
            message: "Ingredient deleted.".to_string(),
        }),
    )
        .into_response()
}
