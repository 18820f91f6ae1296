//! Greeting Service
//!
//! A small web service following Clean/Hexagonal Architecture principles:
//! a numbered greeting endpoint and a PostgreSQL-backed user store.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
