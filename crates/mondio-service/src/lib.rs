//! # mondio-service
//!
//! Business logic service layer for Mondio. Each service orchestrates
//! repositories, the media store, and authentication to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod activation;
pub mod context;
pub mod dog;
pub mod session;
pub mod trainer;
pub mod training;
pub mod upload;
pub mod user;

pub use activation::{ActivationCodeService, CodeGenerator, CodeOutcome, CodeStore};
pub use context::RequestContext;
pub use dog::DogService;
pub use session::SessionService;
pub use trainer::TrainerService;
pub use training::TrainingService;
pub use upload::UploadService;
pub use user::UserService;
