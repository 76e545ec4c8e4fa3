//! Concrete repository implementations, one per entity.

pub mod activation_code;
pub mod dog;
pub mod session;
pub mod trainer;
pub mod training;
pub mod user;

pub use activation_code::ActivationCodeRepository;
pub use dog::DogRepository;
pub use session::SessionRepository;
pub use trainer::TrainerProfileRepository;
pub use training::TrainingRepository;
pub use user::UserRepository;
