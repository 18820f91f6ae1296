//! Delete User Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::UserId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a user
pub struct DeleteUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    /// Create a new DeleteUserUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the user doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: UserId) -> Result<(), UseCaseError> {
        tracing::info!(user_id = %id, "Deleting user");

        let deleted = self.user_repository.delete(id).await?;
        if !deleted {
            tracing::warn!(user_id = %id, "User not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "User".to_string(),
                id: id.to_string(),
            });
        }

        tracing::info!(user_id = %id, "User deleted successfully");
        Ok(())
    }
}
