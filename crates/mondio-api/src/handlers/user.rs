//! Current-user handlers.

use axum::extract::State;
use axum::Json;

use crate::dto::response::{ApiResponse, ProfileResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/user
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<ProfileResponse>>, ApiError> {
    let profile = state.user_service.get_profile(&auth).await?;

    Ok(Json(ApiResponse::ok(ProfileResponse {
        user: UserResponse::from(&profile.user),
        trainer: profile.trainer,
    })))
}
