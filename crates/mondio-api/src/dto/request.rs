//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use mondio_entity::dog::DogLevel;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address.
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// One-time activation code.
    #[validate(length(min = 1, message = "Activation code is required"))]
    pub activation_code: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create/update dog request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DogRequest {
    /// Call name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Breed.
    pub breed: Option<String>,
    /// Age in years.
    #[validate(range(min = 0, max = 30))]
    pub age: Option<i32>,
    /// Competition level.
    pub level: DogLevel,
}

/// Create/update training request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TrainingRequest {
    /// Exercise name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

/// One entry within a session create/update request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SessionEntryRequest {
    /// The exercise being scored.
    pub training_id: Uuid,
    /// Score from 0 to 10.
    #[validate(range(min = 0, max = 10))]
    pub score: i32,
    /// Entry notes.
    pub notes: Option<String>,
}

/// Create session request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSessionRequest {
    /// Target dog.
    pub dog_id: Uuid,
    /// Calendar date.
    pub date: NaiveDate,
    /// Level trained at.
    pub level: DogLevel,
    /// Session notes.
    pub notes: Option<String>,
    /// Entries to create alongside the session.
    #[validate(nested)]
    pub entries: Vec<SessionEntryRequest>,
}

/// Update session request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateSessionRequest {
    /// New target dog.
    pub dog_id: Option<Uuid>,
    /// New date.
    pub date: Option<NaiveDate>,
    /// New level.
    pub level: Option<DogLevel>,
    /// New notes.
    pub notes: Option<String>,
    /// Replacement entries.
    #[validate(nested)]
    pub entries: Option<Vec<SessionEntryRequest>>,
}

/// Trainer note request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TrainerNoteRequest {
    /// The note text.
    #[validate(length(min = 1, max = 2000))]
    pub trainer_note: String,
}

/// Create/update trainer profile request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TrainerProfileRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Biography.
    pub bio: Option<String>,
}
