//! Training exercise entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::ownership::Owned;

/// A user-defined training exercise.
///
/// Referenced by session entries; cannot be deleted while referenced.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Training {
    /// Unique training identifier.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// Exercise name.
    pub name: String,
    /// Relative media path of a demonstration video.
    pub video_url: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Owned for Training {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

/// Data required to create a training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTraining {
    /// The owning user.
    pub user_id: Uuid,
    /// Exercise name.
    pub name: String,
}

/// Data for updating an existing training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTraining {
    /// New exercise name.
    pub name: Option<String>,
}
