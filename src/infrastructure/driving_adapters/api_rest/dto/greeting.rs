//! Greeting DTOs

use serde::{Deserialize, Serialize};

use crate::domain::models::greeting::Greeting;

/// Query parameters accepted by the greeting endpoint
#[derive(Debug, Deserialize)]
pub struct GreetingParams {
    pub name: Option<String>,
}

/// Response body: `{"id": <n>, "content": "Hello, <name>!"}`
#[derive(Debug, Serialize)]
pub struct GreetingResponseDto {
    pub id: u64,
    pub content: String,
}

impl From<Greeting> for GreetingResponseDto {
    fn from(greeting: Greeting) -> Self {
        Self {
            id: greeting.id(),
            content: greeting.content().to_string(),
        }
    }
}
