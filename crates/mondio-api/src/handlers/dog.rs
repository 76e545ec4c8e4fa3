//! Dog CRUD handlers.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use mondio_core::error::AppError;
use mondio_entity::dog::{Dog, UpdateDog};
use mondio_service::dog::NewDog;

use crate::dto::request::DogRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/dogs
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Dog>>>, ApiError> {
    let dogs = state.dog_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(dogs)))
}

/// POST /api/dogs
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<DogRequest>,
) -> Result<Json<ApiResponse<Dog>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let dog = state
        .dog_service
        .create(
            &auth,
            NewDog {
                name: req.name,
                breed: req.breed,
                age: req.age,
                level: req.level,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(dog)))
}

/// PUT /api/dogs/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<DogRequest>,
) -> Result<Json<ApiResponse<Dog>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let dog = state
        .dog_service
        .update(
            &auth,
            id,
            UpdateDog {
                name: Some(req.name),
                breed: req.breed,
                age: req.age,
                level: Some(req.level),
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(dog)))
}

/// DELETE /api/dogs/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.dog_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Dog deleted".to_string(),
    })))
}
