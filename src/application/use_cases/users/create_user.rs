//! Create User Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{CreateUserData, User};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new user
pub struct CreateUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    /// Create a new CreateUserUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if persistence fails.
    pub async fn execute(&self, data: CreateUserData) -> Result<User, UseCaseError> {
        tracing::info!(name = %data.name, "Creating new user");

        let user = User::new(data);
        let created = self.user_repository.create(&user).await?;

        tracing::info!(user_id = ?created.id(), "User created successfully");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::user::UserId;
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    struct MockUserRepository {
        create_result: Mutex<Option<Result<User, RepositoryError>>>,
    }

    impl MockUserRepository {
        fn new() -> Self {
            Self {
                create_result: Mutex::new(None),
            }
        }

        fn with_create(self, result: Result<User, RepositoryError>) -> Self {
            *self.create_result.lock().unwrap() = Some(result);
            self
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create(&self, user: &User) -> Result<User, RepositoryError> {
            self.create_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(user.clone()))
        }

        async fn find_by_id(&self, _id: UserId) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }

        async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
            Ok(vec![])
        }

        async fn update(&self, _user: &User) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }

        async fn delete(&self, _id: UserId) -> Result<bool, RepositoryError> {
            Ok(false)
        }
    }

    fn create_test_data() -> CreateUserData {
        CreateUserData {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_user() {
        let persisted = User::restore(
            UserId::new(1),
            "Ada Lovelace".to_string(),
            "ada@example.com".to_string(),
            Utc::now(),
            Utc::now(),
        );
        let repo = Arc::new(MockUserRepository::new().with_create(Ok(persisted)));

        let use_case = CreateUserUseCase::new(repo);
        let result = use_case.execute(create_test_data()).await;

        assert!(result.is_ok());
        let user = result.unwrap();
        assert_eq!(user.id(), Some(UserId::new(1)));
        assert_eq!(user.name(), "Ada Lovelace");
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let repo = Arc::new(
            MockUserRepository::new()
                .with_create(Err(RepositoryError::Mapping("boom".to_string()))),
        );

        let use_case = CreateUserUseCase::new(repo);
        let result = use_case.execute(create_test_data()).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Repository(_)));
    }
}
