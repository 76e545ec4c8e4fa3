//! Session entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One scored exercise record within a training session.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SessionEntry {
    /// Unique entry identifier.
    pub id: Uuid,
    /// The session this entry belongs to.
    pub session_id: Uuid,
    /// The exercise that was scored.
    pub training_id: Uuid,
    /// Score from 0 to 10.
    pub score: i32,
    /// Free-form entry notes.
    pub notes: Option<String>,
    /// Relative media path of the entry video.
    pub video_url: Option<String>,
    /// One-time note appended by a trainer.
    ///
    /// Set at most once; no update or delete path exists for it.
    pub trainer_note: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a session entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionEntry {
    /// The exercise being scored.
    pub training_id: Uuid,
    /// Score from 0 to 10.
    pub score: i32,
    /// Entry notes.
    pub notes: Option<String>,
}
