//! User DTOs
//!
//! Data transfer objects for user API endpoints. No validation is applied;
//! any payload the framework deserializes is accepted as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::user::{CreateUserData, UpdateUserData, User};

/// Request body for creating a user
#[derive(Debug, Deserialize)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
}

impl From<CreateUserDto> for CreateUserData {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
        }
    }
}

/// Request body for updating a user; omitted fields keep their value
#[derive(Debug, Deserialize)]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<UpdateUserDto> for UpdateUserData {
    fn from(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
        }
    }
}

/// Response body for a persisted user
#[derive(Debug, Serialize)]
pub struct UserResponseDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(user: User) -> Self {
        Self {
            // Persisted users always carry an id
            id: user.id().map_or(0, |id| id.as_i64()),
            name: user.name().to_string(),
            email: user.email().to_string(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}
