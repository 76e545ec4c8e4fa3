//! Activation code administration handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;

use mondio_core::types::pagination::{PageRequest, PageResponse};
use mondio_entity::activation::ActivationCode;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/activation-codes/generate
pub async fn generate(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<ActivationCode>>, ApiError> {
    let code = state.activation_service.generate(&auth).await?;
    Ok(Json(ApiResponse::ok(code)))
}

/// GET /api/activation-codes
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(page): Query<PageRequest>,
) -> Result<Json<ApiResponse<PageResponse<ActivationCode>>>, ApiError> {
    let codes = state.activation_service.list(&auth, &page).await?;
    Ok(Json(ApiResponse::ok(codes)))
}

/// DELETE /api/activation-codes/{id}
pub async fn revoke(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.activation_service.revoke(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Code revoked".to_string(),
    })))
}
