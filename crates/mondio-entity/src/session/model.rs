//! Training session entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::dog::DogLevel;
use crate::ownership::Owned;

use super::entry::{CreateSessionEntry, SessionEntry};

/// A logged training session against one dog.
///
/// Owned by the user who created it; references exactly one dog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// The dog this session was logged against.
    pub dog_id: Uuid,
    /// Calendar date of the session.
    pub date: NaiveDate,
    /// Level trained at.
    pub level: DogLevel,
    /// Free-form session notes.
    pub notes: Option<String>,
    /// Relative media path of the session video.
    pub video_url: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Owned for Session {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

/// A session together with its scored entries, newest entries last.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionWithEntries {
    /// The session row.
    #[serde(flatten)]
    pub session: Session,
    /// Scored exercise entries belonging to the session.
    pub entries: Vec<SessionEntry>,
}

/// Data required to create a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSession {
    /// The owning user.
    pub user_id: Uuid,
    /// Target dog.
    pub dog_id: Uuid,
    /// Calendar date.
    pub date: NaiveDate,
    /// Level trained at.
    pub level: DogLevel,
    /// Session notes.
    pub notes: Option<String>,
    /// Entries to create alongside the session.
    pub entries: Vec<CreateSessionEntry>,
}

/// Data for updating an existing session.
///
/// When `entries` is present the existing entries are replaced wholesale,
/// matching how the edit form resubmits the full list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSession {
    /// New target dog.
    pub dog_id: Option<Uuid>,
    /// New date.
    pub date: Option<NaiveDate>,
    /// New level.
    pub level: Option<DogLevel>,
    /// New notes.
    pub notes: Option<String>,
    /// Replacement entries.
    pub entries: Option<Vec<CreateSessionEntry>>,
}
