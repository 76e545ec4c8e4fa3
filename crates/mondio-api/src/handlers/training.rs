//! Training CRUD handlers.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use mondio_core::error::AppError;
use mondio_entity::training::{Training, UpdateTraining};

use crate::dto::request::TrainingRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/trainings
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Training>>>, ApiError> {
    let trainings = state.training_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(trainings)))
}

/// POST /api/trainings
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<TrainingRequest>,
) -> Result<Json<ApiResponse<Training>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let training = state.training_service.create(&auth, &req.name).await?;
    Ok(Json(ApiResponse::ok(training)))
}

/// PUT /api/trainings/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<TrainingRequest>,
) -> Result<Json<ApiResponse<Training>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let training = state
        .training_service
        .update(
            &auth,
            id,
            UpdateTraining {
                name: Some(req.name),
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(training)))
}

/// DELETE /api/trainings/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.training_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Training deleted".to_string(),
    })))
}
