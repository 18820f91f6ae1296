//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for spinning up a PostgreSQL container,
//! running migrations, and creating a test application.

use std::sync::Arc;

use axum::Router;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower_http::trace::TraceLayer;

use greeting_service::application::use_cases::greetings::GreetUseCase;
use greeting_service::application::use_cases::users::{
    CreateUserUseCase, DeleteUserUseCase, GetAllUsersUseCase, GetUserByIdUseCase,
    UpdateUserUseCase,
};
use greeting_service::infrastructure::driven_adapters::user_repository::PostgresUserRepository;
use greeting_service::infrastructure::driving_adapters::api_rest::handlers::{greetings, users};
use greeting_service::infrastructure::driving_adapters::api_rest::AppState;

/// Request body for user creation
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

impl Default for CreateUserRequest {
    fn default() -> Self {
        Self {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }
}

/// Request body for user updates
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Response body for user endpoints
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Response body for the greeting endpoint
#[derive(Debug, Deserialize)]
pub struct GreetingResponse {
    pub id: u64,
    pub content: String,
}

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    /// Create a new test application with a fresh PostgreSQL database
    pub async fn new() -> Self {
        // Start PostgreSQL container
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

        // Create connection pool
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        // Run migrations
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        // Create repository
        let user_repository = Arc::new(PostgresUserRepository::new(pool.clone()));

        // Create use cases
        let greet_use_case = Arc::new(GreetUseCase::new());
        let create_user_use_case = Arc::new(CreateUserUseCase::new(user_repository.clone()));
        let get_user_by_id_use_case = Arc::new(GetUserByIdUseCase::new(user_repository.clone()));
        let get_all_users_use_case = Arc::new(GetAllUsersUseCase::new(user_repository.clone()));
        let update_user_use_case = Arc::new(UpdateUserUseCase::new(user_repository.clone()));
        let delete_user_use_case = Arc::new(DeleteUserUseCase::new(user_repository.clone()));

        // Create application state
        let app_state = AppState {
            greet_use_case,
            create_user_use_case,
            get_user_by_id_use_case,
            get_all_users_use_case,
            update_user_use_case,
            delete_user_use_case,
        };

        // Build router
        let router = Router::new()
            .nest("/greeting", greetings::router())
            .nest("/users", users::router())
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        Self {
            router,
            pool,
            _container: container,
        }
    }

    /// Clear all data from the database (useful between tests)
    #[allow(dead_code)]
    pub async fn clear_database(&self) {
        sqlx::query("TRUNCATE TABLE users CASCADE")
            .execute(&self.pool)
            .await
            .expect("Failed to truncate users table");
    }
}

