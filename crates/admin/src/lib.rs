//! Diverse Capital Admin library.
//!
//! The admin REST API as a library, so the binary, the unit tests and the
//! integration tests all build the same router.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`db`] - In-memory store and repositories
//! - [`models`] - Entities and typed partial updates
//! - [`routes`] - Axum handlers and the application router
//!
//! There is no authentication layer; deploy behind a trusted network.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

pub use routes::app;
