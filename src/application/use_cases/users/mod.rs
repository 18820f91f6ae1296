//! User Use Cases
//!
//! Application logic for the user CRUD capability set. There are no business
//! rules here beyond existence checks; persistence does the rest.

mod create_user;
mod delete_user;
mod get_all_users;
mod get_user_by_id;
mod update_user;

pub use create_user::CreateUserUseCase;
pub use delete_user::DeleteUserUseCase;
pub use get_all_users::GetAllUsersUseCase;
pub use get_user_by_id::GetUserByIdUseCase;
pub use update_user::UpdateUserUseCase;
