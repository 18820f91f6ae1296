//! API DTOs
//!
//! Request and response shapes for the REST API.

pub mod greeting;
pub mod user;
