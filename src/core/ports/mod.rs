//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core logic and the outside
//! world: the process environment, the database and the cache.
//!
//! Implementations live in the `adapters` module.

mod cache;
mod database;
mod env_source;
mod error;

pub use cache::{CacheInfo, CacheProbe, ProbeEntry};
pub use database::{DatabaseInfo, DatabaseProbe};
pub use env_source::EnvSource;
pub use error::ProbeError;

#[cfg(test)]
pub use cache::MockCacheProbe;
#[cfg(test)]
pub use database::MockDatabaseProbe;
