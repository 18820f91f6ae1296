//! Get User By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{User, UserId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a user by ID
pub struct GetUserByIdUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl GetUserByIdUseCase {
    /// Create a new GetUserByIdUseCase
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
    pub async fn execute(&self, id: UserId) -> Result<User, UseCaseError> {
        tracing::debug!(user_id = %id, "Getting user by ID");

        let user = self.user_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(user_id = %id, "User not found");
            UseCaseError::NotFound {
                resource: "User".to_string(),
                id: id.to_string(),
            }
        })?;

        Ok(user)
    }
}
