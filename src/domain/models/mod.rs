//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod greeting;
pub mod user;

pub use greeting::Greeting;
pub use user::{CreateUserData, UpdateUserData, User, UserId};
