//! Ownership marker trait for user-owned resources.

use uuid::Uuid;

/// A resource owned by exactly one user.
///
/// Implemented by every entity whose mutation rights are decided solely by
/// the owning `user_id` column: dogs, sessions, and trainings. Trainer
/// assignment fields are deliberately not part of this trait.
pub trait Owned {
    /// The ID of the owning user.
    fn owner_id(&self) -> Uuid;
}
