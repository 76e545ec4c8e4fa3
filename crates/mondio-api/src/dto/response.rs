//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mondio_entity::trainer::TrainerProfile;
use mondio_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Email.
    pub email: String,
    /// Profile photo path.
    pub photo_url: Option<String>,
    /// Whether the trainer role was granted.
    pub is_trainer: bool,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            photo_url: user.photo_url.clone(),
            is_trainer: user.is_trainer,
            created_at: user.created_at,
        }
    }
}

/// Login/registration response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The signed access token.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: UserResponse,
}

/// Current user profile response, including the trainer profile when
/// present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// The user.
    #[serde(flatten)]
    pub user: UserResponse,
    /// Trainer profile, when the role was granted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer: Option<TrainerProfile>,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Database reachability.
    pub database: String,
}
