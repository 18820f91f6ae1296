//! Get All Users Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::User;
use crate::shared::errors::UseCaseError;

/// Use case for listing all users
pub struct GetAllUsersUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl GetAllUsersUseCase {
    /// Create a new GetAllUsersUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<User>, UseCaseError> {
        tracing::debug!("Listing all users");

        let users = self.user_repository.find_all().await?;

        tracing::debug!(count = users.len(), "Users listed");
        Ok(users)
    }
}
