//! User Repository Gateway
//!
//! Abstract trait defining the contract for user persistence operations.

use async_trait::async_trait;

use crate::domain::models::user::{User, UserId};
use crate::shared::errors::RepositoryError;

/// Repository trait for User persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user, returning it with its storage-assigned id
    async fn create(&self, user: &User) -> Result<User, RepositoryError>;

    /// Find a user by its ID
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// Find all users, sorted by id ascending
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// Update an existing user, returning `None` if it does not exist
    async fn update(&self, user: &User) -> Result<Option<User>, RepositoryError>;

    /// Delete a user, returning whether a row was removed
    async fn delete(&self, id: UserId) -> Result<bool, RepositoryError>;
}
