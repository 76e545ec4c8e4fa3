//! Ownership and trainer-role authorization predicates.
//!
//! These are pure functions over already-fetched values: no I/O, no failure
//! modes. An absent actor or resource always evaluates to `false`, never to
//! an error. The service layer evaluates them on every mutating operation
//! and converts denial into a forbidden error.

use uuid::Uuid;

use mondio_entity::dog::Dog;
use mondio_entity::session::SessionEntry;
use mondio_entity::user::User;
use mondio_entity::Owned;

/// The acting user, reduced to the fields authorization depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    /// The user's ID.
    pub id: Uuid,
    /// Whether the trainer role has been granted.
    pub is_trainer: bool,
}

impl Actor {
    /// Create an actor from raw parts.
    pub fn new(id: Uuid, is_trainer: bool) -> Self {
        Self { id, is_trainer }
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            is_trainer: user.is_trainer,
        }
    }
}

/// Whether the actor may mutate (edit / delete / upload for) a resource.
///
/// Ownership is the sole input: the actor must be the resource's owner.
/// Trainer status and trainer assignment are never consulted — a trainer
/// viewing a client's dog sees it in listings but may not mutate it.
pub fn can_mutate<R: Owned>(actor: Option<Actor>, resource: Option<&R>) -> bool {
    match (actor, resource) {
        (Some(actor), Some(resource)) => resource.owner_id() == actor.id,
        _ => false,
    }
}

/// Whether the actor may append a trainer note to a session entry.
///
/// Requires the trainer role and an entry that has no note yet. Once a note
/// exists it can never be overwritten: no update or delete path for trainer
/// notes is exposed anywhere.
pub fn can_add_trainer_note(actor: Option<Actor>, entry: Option<&SessionEntry>) -> bool {
    match (actor, entry) {
        (Some(actor), Some(entry)) => actor.is_trainer && entry.trainer_note.is_none(),
        _ => false,
    }
}

/// Whether a dog classifies as the actor's own in listings.
pub fn is_own_dog(actor: Actor, dog: &Dog) -> bool {
    dog.user_id == actor.id
}

/// Whether a dog classifies as a client's dog in the actor's listings.
///
/// A dog owned by its assigned trainer classifies as "own", not as a client
/// dog — the owner check wins the tie.
pub fn is_client_dog(actor: Actor, dog: &Dog) -> bool {
    actor.is_trainer && dog.trainer_id == Some(actor.id) && dog.user_id != actor.id
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mondio_entity::dog::DogLevel;

    fn actor(is_trainer: bool) -> Actor {
        Actor::new(Uuid::new_v4(), is_trainer)
    }

    fn dog(user_id: Uuid, trainer_id: Option<Uuid>) -> Dog {
        Dog {
            id: Uuid::new_v4(),
            user_id,
            trainer_id,
            name: "Rex".to_string(),
            breed: None,
            age: None,
            level: DogLevel::Mr1,
            photo_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn entry(trainer_note: Option<&str>) -> SessionEntry {
        SessionEntry {
            id: Uuid::new_v4(),
            session_id: Uuid::new_v4(),
            training_id: Uuid::new_v4(),
            score: 7,
            notes: None,
            video_url: None,
            trainer_note: trainer_note.map(String::from),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_owner_can_mutate() {
        let me = actor(false);
        let own = dog(me.id, None);
        assert!(can_mutate(Some(me), Some(&own)));
    }

    #[test]
    fn test_non_owner_cannot_mutate() {
        let me = actor(false);
        let other = dog(Uuid::new_v4(), None);
        assert!(!can_mutate(Some(me), Some(&other)));
    }

    #[test]
    fn test_trainer_assignment_never_grants_mutation() {
        let me = actor(true);
        let client_dog = dog(Uuid::new_v4(), Some(me.id));
        assert!(!can_mutate(Some(me), Some(&client_dog)));
    }

    #[test]
    fn test_absent_actor_or_resource_is_false() {
        let me = actor(false);
        let own = dog(me.id, None);
        assert!(!can_mutate::<Dog>(None, Some(&own)));
        assert!(!can_mutate::<Dog>(Some(me), None));
        assert!(!can_mutate::<Dog>(None, None));
    }

    #[test]
    fn test_trainer_can_note_unnoted_entry() {
        assert!(can_add_trainer_note(Some(actor(true)), Some(&entry(None))));
    }

    #[test]
    fn test_trainer_cannot_overwrite_note() {
        assert!(!can_add_trainer_note(
            Some(actor(true)),
            Some(&entry(Some("good focus")))
        ));
    }

    #[test]
    fn test_non_trainer_cannot_note() {
        assert!(!can_add_trainer_note(Some(actor(false)), Some(&entry(None))));
        assert!(!can_add_trainer_note(None, Some(&entry(None))));
    }

    #[test]
    fn test_own_dog_wins_over_client_dog() {
        // A trainer who owns a dog and assigned themselves as its trainer
        // still sees it as "own".
        let me = actor(true);
        let self_assigned = dog(me.id, Some(me.id));
        assert!(is_own_dog(me, &self_assigned));
        assert!(!is_client_dog(me, &self_assigned));
    }

    #[test]
    fn test_client_dog_classification() {
        let me = actor(true);
        let client_dog = dog(Uuid::new_v4(), Some(me.id));
        assert!(!is_own_dog(me, &client_dog));
        assert!(is_client_dog(me, &client_dog));

        // Without the trainer role the same dog is invisible as a client dog.
        let plain = Actor::new(me.id, false);
        assert!(!is_client_dog(plain, &client_dog));
    }
}
