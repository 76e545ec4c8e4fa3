//! Request context carrying the authenticated user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mondio_auth::access::Actor;

/// Context for the current authenticated request.
///
/// Extracted from the validated JWT and passed into service methods so that
/// every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's email (convenience field from JWT claims).
    pub email: String,
    /// Whether the trainer role was granted at token issuance.
    pub is_trainer: bool,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, email: String, is_trainer: bool) -> Self {
        Self {
            user_id,
            email,
            is_trainer,
            request_time: Utc::now(),
        }
    }

    /// The acting user reduced to the fields authorization depends on.
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, self.is_trainer)
    }
}
