//! Driving Adapters
//!
//! Entry points through which the outside world drives the application.

pub mod api_rest;
