//! Domain Layer
//!
//! Contains the core domain models and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::user_repository::UserRepository;
pub use models::greeting::Greeting;
pub use models::user::{CreateUserData, UpdateUserData, User, UserId};
