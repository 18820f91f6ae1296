//! API Handlers

pub mod greetings;
pub mod users;
