//! Trainer profile and assignment handlers.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use mondio_core::error::AppError;
use mondio_entity::dog::Dog;
use mondio_entity::trainer::{TrainerProfile, UpdateTrainerProfile};
use mondio_service::trainer::{ClientSummary, TrainerStatus};

use crate::dto::request::TrainerProfileRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/trainer/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<TrainerStatus>>, ApiError> {
    let status = state.trainer_service.get_status(&auth).await?;
    Ok(Json(ApiResponse::ok(status)))
}

/// POST /api/trainer/profile
pub async fn create_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<TrainerProfileRequest>,
) -> Result<Json<ApiResponse<TrainerProfile>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let profile = state
        .trainer_service
        .create_profile(&auth, &req.name, req.bio)
        .await?;

    Ok(Json(ApiResponse::ok(profile)))
}

/// PUT /api/trainer/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<TrainerProfileRequest>,
) -> Result<Json<ApiResponse<TrainerProfile>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let profile = state
        .trainer_service
        .update_profile(
            &auth,
            UpdateTrainerProfile {
                name: Some(req.name),
                bio: req.bio,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(profile)))
}

/// GET /api/trainer/users
pub async fn list_clients(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<ClientSummary>>>, ApiError> {
    let clients = state.trainer_service.list_clients(&auth).await?;
    Ok(Json(ApiResponse::ok(clients)))
}

/// POST /api/trainer/assign/dog/{dog_id}
pub async fn assign_dog(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(dog_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Dog>>, ApiError> {
    let dog = state.trainer_service.assign_dog(&auth, dog_id).await?;
    Ok(Json(ApiResponse::ok(dog)))
}

/// DELETE /api/trainer/assign/dog/{dog_id}
pub async fn unassign_dog(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(dog_id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.trainer_service.unassign_dog(&auth, dog_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Trainer removed from dog".to_string(),
    })))
}
