//! Greeting Handlers
//!
//! HTTP handler for the greeting endpoint. A single method-unconstrained
//! route serves all verbs, so GET and non-GET requests cannot diverge.

use axum::{
    extract::{Query, State},
    routing::any,
    Json, Router,
};

use crate::infrastructure::driving_adapters::api_rest::dto::greeting::{
    GreetingParams, GreetingResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;

/// Create the router for the greeting endpoint
pub fn router() -> Router<AppState> {
    Router::new().route("/", any(greet))
}

/// ANY /greeting - Produce a numbered greeting
///
/// # Responses
///
/// * 200 OK - `{"id": <n>, "content": "Hello, <name>!"}`
///
/// The `name` query parameter is optional; absent or empty values default to
/// `"World"`. There are no failure paths.
#[axum::debug_handler]
async fn greet(
    State(state): State<AppState>,
    Query(params): Query<GreetingParams>,
) -> Json<GreetingResponseDto> {
    let greeting = state.greet_use_case.execute(params.name.as_deref());
    Json(GreetingResponseDto::from(greeting))
}
