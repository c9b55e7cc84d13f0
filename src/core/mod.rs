//! Core domain logic for diagpage
//!
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (ValidationResult, HealthCheckResult, LogLevel)
//! - `services/` - Validation, masking and health-check logic
//! - `ports/` - Trait definitions for the environment, database and cache

pub mod models;
pub mod ports;
pub mod services;
