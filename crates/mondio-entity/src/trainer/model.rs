//! Trainer profile entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Public trainer profile attached to a user.
///
/// Creating a profile is what grants the trainer role; a user has at most
/// one profile and it is never detached.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TrainerProfile {
    /// Unique profile identifier.
    pub id: Uuid,
    /// The user this profile belongs to (unique).
    pub user_id: Uuid,
    /// Display name shown to clients.
    pub name: String,
    /// Free-form biography.
    pub bio: Option<String>,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a trainer profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTrainerProfile {
    /// The user gaining the trainer role.
    pub user_id: Uuid,
    /// Display name.
    pub name: String,
    /// Biography.
    pub bio: Option<String>,
}

/// Data for updating an existing trainer profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTrainerProfile {
    /// New display name.
    pub name: Option<String>,
    /// New biography.
    pub bio: Option<String>,
}
