//! User Domain Model
//!
//! A persisted user entity keyed by a database-assigned numeric identifier.

use chrono::{DateTime, Utc};

/// Newtype wrapper for User ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(i64);

impl UserId {
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying numeric identifier
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Data required to create a new User
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub name: String,
    pub email: String,
}

/// Data for updating an existing User (all fields optional for partial updates)
#[derive(Debug, Clone, Default)]
pub struct UpdateUserData {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// User domain entity
///
/// The identifier is assigned by storage, so a freshly created user carries
/// `id == None` until the repository persists it.
#[derive(Debug, Clone)]
pub struct User {
    id: Option<UserId>,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User from creation data, not yet persisted
    #[must_use]
    pub fn new(data: CreateUserData) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: data.name,
            email: data.email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Restore a User from persisted data
    #[must_use]
    pub fn restore(
        id: UserId,
        name: String,
        email: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            email,
            created_at,
            updated_at,
        }
    }

    /// Apply updates to the user, returning a new instance
    #[must_use]
    pub fn with_updates(self, data: UpdateUserData) -> Self {
        Self {
            id: self.id,
            name: data.name.unwrap_or(self.name),
            email: data.email.unwrap_or(self.email),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
