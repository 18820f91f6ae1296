//! Update User Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{UpdateUserData, User, UserId};
use crate::shared::errors::UseCaseError;

/// Use case for updating an existing user
pub struct UpdateUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl UpdateUserUseCase {
    /// Create a new UpdateUserUseCase
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
    pub async fn execute(&self, id: UserId, data: UpdateUserData) -> Result<User, UseCaseError> {
        tracing::info!(user_id = %id, "Updating user");

        let existing = self.user_repository.find_by_id(id).await?.ok_or_else(|| {
            UseCaseError::NotFound {
                resource: "User".to_string(),
                id: id.to_string(),
            }
        })?;

        let updated = existing.with_updates(data);
        let persisted = self
            .user_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::NotFound {
                resource: "User".to_string(),
                id: id.to_string(),
            })?;

        tracing::info!(user_id = %id, "User updated successfully");
        Ok(persisted)
    }
}
