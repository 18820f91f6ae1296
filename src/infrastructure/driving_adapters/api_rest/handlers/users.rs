//! User Handlers
//!
//! HTTP handlers for user CRUD operations. Failure behavior is the default
//! framework mapping: 404 for a missing id, 500 for storage errors, axum's
//! own rejections for malformed payloads.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::domain::models::user::UserId;
use crate::infrastructure::driving_adapters::api_rest::dto::user::{
    CreateUserDto, UpdateUserDto, UserResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for user endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/", get(get_all_users))
        .route("/:id", get(get_user_by_id))
        .route("/:id", put(update_user))
        .route("/:id", delete(delete_user))
}

/// POST /users - Create a new user
///
/// # Responses
///
/// * 201 Created - User created successfully
#[axum::debug_handler]
async fn create_user(
    State(state): State<AppState>,
    Json(dto): Json<CreateUserDto>,
) -> Result<(StatusCode, Json<UserResponseDto>), ApiError> {
    let user = state.create_user_use_case.execute(dto.into()).await?;
    Ok((StatusCode::CREATED, Json(UserResponseDto::from(user))))
}

/// GET /users - List all users
///
/// # Responses
///
/// * 200 OK - All users, sorted by id
#[axum::debug_handler]
async fn get_all_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponseDto>>, ApiError> {
    let users = state.get_all_users_use_case.execute().await?;
    let response: Vec<UserResponseDto> = users.into_iter().map(UserResponseDto::from).collect();
    Ok(Json(response))
}

/// GET /users/:id - Get a user by ID
///
/// # Responses
///
/// * 200 OK - User found
/// * 404 Not Found - User does not exist
#[axum::debug_handler]
async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponseDto>, ApiError> {
    let user = state.get_user_by_id_use_case.execute(UserId::new(id)).await?;
    Ok(Json(UserResponseDto::from(user)))
}

/// PUT /users/:id - Update a user
///
/// # Responses
///
/// * 200 OK - User updated successfully
/// * 404 Not Found - User does not exist
#[axum::debug_handler]
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateUserDto>,
) -> Result<Json<UserResponseDto>, ApiError> {
    let user = state
        .update_user_use_case
        .execute(UserId::new(id), dto.into())
        .await?;
    Ok(Json(UserResponseDto::from(user)))
}

/// DELETE /users/:id - Delete a user
///
/// # Responses
///
/// * 204 No Content - User deleted successfully
/// * 404 Not Found - User does not exist
#[axum::debug_handler]
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.delete_user_use_case.execute(UserId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
