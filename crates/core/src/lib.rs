//! Diverse Capital Core - Shared types library.
//!
//! This crate provides common types used across the Diverse Capital components:
//! - `admin` - Admin REST API and back-office server
//! - `integration-tests` - End-to-end API tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Identifier newtypes, sector and status enums, money amounts
//! - [`projection`] - Closed-form ROI projections shown on the sector pages

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod projection;
pub mod types;

pub use projection::{DEFAULT_MINING_MONTHLY_RATE, RoiProjection};
pub use types::*;
