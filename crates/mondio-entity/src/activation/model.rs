//! Activation code entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A one-time registration code.
///
/// `code` is unique across all records; `used` transitions false→true
/// exactly once when the code is consumed at registration, guarded by a
/// conditional UPDATE so concurrent registrations cannot both win.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivationCode {
    /// Unique record identifier.
    pub id: Uuid,
    /// The 8-character code value.
    pub code: String,
    /// Whether the code has been consumed.
    pub used: bool,
    /// The user who consumed the code.
    pub used_by: Option<Uuid>,
    /// When the code was consumed.
    pub used_at: Option<DateTime<Utc>>,
    /// When the code was generated.
    pub created_at: DateTime<Utc>,
}
