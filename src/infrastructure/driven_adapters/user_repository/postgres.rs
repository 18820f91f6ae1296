//! PostgreSQL User Repository Implementation
//!
//! Implements the UserRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{User, UserId};
use crate::shared::errors::RepositoryError;

/// Database row representation for the users table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::restore(
            UserId::new(row.id),
            row.name,
            row.email,
            row.created_at,
            row.updated_at,
        )
    }
}

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new PostgresUserRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, created_at, updated_at
            "#,
        )
        .bind(user.name())
        .bind(user.email())
        .bind(user.created_at())
        .bind(user.updated_at())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, created_at, updated_at
            FROM users
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update(&self, user: &User) -> Result<Option<User>, RepositoryError> {
        let id = user
            .id()
            .ok_or_else(|| RepositoryError::Mapping("Cannot update a user without an id".to_string()))?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET name = $2, email = $3, updated_at = $4
            WHERE id = $1
            RETURNING id, name, email, created_at, updated_at
            "#,
        )
        .bind(id.as_i64())
        .bind(user.name())
        .bind(user.email())
        .bind(user.updated_at())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn delete(&self, id: UserId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
