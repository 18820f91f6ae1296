//! REST API Module
//!
//! Contains HTTP handlers and DTOs for the REST API.

pub mod dto;
pub mod handlers;

use std::sync::Arc;

use crate::application::use_cases::greetings::GreetUseCase;
use crate::application::use_cases::users::{
    CreateUserUseCase, DeleteUserUseCase, GetAllUsersUseCase, GetUserByIdUseCase, UpdateUserUseCase,
};

/// Application state shared across all handlers
///
/// The greeting counter lives inside `greet_use_case`, so its process-wide
/// numbering invariant holds for as long as this state does.
#[derive(Clone)]
pub struct AppState {
    pub greet_use_case: Arc<GreetUseCase>,
    pub create_user_use_case: Arc<CreateUserUseCase>,
    pub get_user_by_id_use_case: Arc<GetUserByIdUseCase>,
    pub get_all_users_use_case: Arc<GetAllUsersUseCase>,
    pub update_user_use_case: Arc<UpdateUserUseCase>,
    pub delete_user_use_case: Arc<DeleteUserUseCase>,
}
