//! Business logic services
//!
//! These services operate on data and ports passed in by the caller.
//!
//! - [`validator`] - Check required environment keys
//! - [`masker`] - Redact sensitive values for display
//! - [`health`] - Probe the database and cache
//! - [`inventory`] - Collect runtime facts and the environment table

pub mod health;
pub mod inventory;
pub mod masker;
pub mod validator;

pub use health::{check_all, check_cache, check_cache_with, check_database, probe_entry};
pub use inventory::{environment_table, runtime_info};
pub use masker::{mask, redact};
pub use validator::validate;
