//! Dog entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::ownership::Owned;

use super::level::DogLevel;

/// A dog profile.
///
/// Owned exclusively by `user_id`. `trainer_id`, when set and distinct from
/// the owner, makes the dog visible to that trainer; it never grants the
/// trainer mutation rights.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Dog {
    /// Unique dog identifier.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// The assigned trainer, if any.
    pub trainer_id: Option<Uuid>,
    /// Call name.
    pub name: String,
    /// Breed.
    pub breed: Option<String>,
    /// Age in years.
    pub age: Option<i32>,
    /// Current competition level.
    pub level: DogLevel,
    /// Relative media path of the dog's photo.
    pub photo_url: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Owned for Dog {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

/// Data required to create a dog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDog {
    /// The owning user.
    pub user_id: Uuid,
    /// Call name.
    pub name: String,
    /// Breed.
    pub breed: Option<String>,
    /// Age in years.
    pub age: Option<i32>,
    /// Competition level.
    pub level: DogLevel,
}

/// Data for updating an existing dog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDog {
    /// New call name.
    pub name: Option<String>,
    /// New breed.
    pub breed: Option<String>,
    /// New age.
    pub age: Option<i32>,
    /// New competition level.
    pub level: Option<DogLevel>,
}
