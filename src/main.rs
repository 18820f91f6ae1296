//! Greeting Service - Main Entry Point

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greeting_service::application::use_cases::greetings::GreetUseCase;
use greeting_service::application::use_cases::users::{
    CreateUserUseCase, DeleteUserUseCase, GetAllUsersUseCase, GetUserByIdUseCase,
    UpdateUserUseCase,
};
use greeting_service::infrastructure::driven_adapters::config::AppConfig;
use greeting_service::infrastructure::driven_adapters::database;
use greeting_service::infrastructure::driven_adapters::user_repository::PostgresUserRepository;
use greeting_service::infrastructure::driving_adapters::api_rest::handlers::{greetings, users};
use greeting_service::infrastructure::driving_adapters::api_rest::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greeting_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repository
    let user_repository = Arc::new(PostgresUserRepository::new(pool));

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
    let app = Router::new()
        .nest("/greeting", greetings::router())
        .nest("/users", users::router())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
