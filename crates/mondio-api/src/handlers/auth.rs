//! Auth handlers — register and login.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use mondio_core::error::AppError;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, AuthResponse, UserResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state
        .user_service
        .register(&req.email, &req.password, &req.activation_code)
        .await?;

    Ok(Json(ApiResponse::ok(AuthResponse {
        token: result.token.token,
        expires_at: result.token.expires_at,
        user: UserResponse::from(&result.user),
    })))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state.user_service.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(AuthResponse {
        token: result.token.token,
        expires_at: result.token.expires_at,
        user: UserResponse::from(&result.user),
    })))
}
