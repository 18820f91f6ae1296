//! Use Cases
//!
//! Application-specific rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod greetings;
pub mod users;

pub use greetings::GreetUseCase;
pub use users::{
    CreateUserUseCase, DeleteUserUseCase, GetAllUsersUseCase, GetUserByIdUseCase, UpdateUserUseCase,
};
