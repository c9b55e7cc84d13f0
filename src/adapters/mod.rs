//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - [`env`] - Process environment and in-memory lookups
//! - `mysql_probe` - MySQL round trip (cargo feature `mysql`)
//! - `redis_probe` - Redis round trip (cargo feature `redis`)
//!
//! Drivers that are compiled out are replaced by [`UnavailableProbe`].

pub mod env;
#[cfg(feature = "mysql")]
pub mod mysql_probe;
#[cfg(feature = "redis")]
pub mod redis_probe;

use crate::config::{CacheSettings, DatabaseSettings};
use crate::core::models::ComponentInfo;
use crate::core::ports::{
    CacheInfo, CacheProbe, DatabaseInfo, DatabaseProbe, ProbeEntry, ProbeError,
};

/// Probe standing in for a driver that was not compiled in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnavailableProbe(pub &'static str);

impl DatabaseProbe for UnavailableProbe {
    fn server_info(&self, _settings: &DatabaseSettings) -> Result<DatabaseInfo, ProbeError> {
        Err(ProbeError::Unavailable(self.0))
    }
}

impl CacheProbe for UnavailableProbe {
    fn round_trip(
        &self,
        _settings: &CacheSettings,
        _entry: &ProbeEntry,
    ) -> Result<CacheInfo, ProbeError> {
        Err(ProbeError::Unavailable(self.0))
    }
}

/// The database probe for this build
#[must_use]
pub fn database_probe() -> Box<dyn DatabaseProbe> {
    #[cfg(feature = "mysql")]
    {
        Box::new(mysql_probe::MysqlProbe::new())
    }
    #[cfg(not(feature = "mysql"))]
    {
        Box::new(UnavailableProbe("MySQL"))
    }
}

/// The cache probe for this build
#[must_use]
pub fn cache_probe() -> Box<dyn CacheProbe> {
    #[cfg(feature = "redis")]
    {
        Box::new(redis_probe::RedisProbe::new())
    }
    #[cfg(not(feature = "redis"))]
    {
        Box::new(UnavailableProbe("Redis"))
    }
}

/// Probe drivers and whether this build includes them
#[must_use]
pub fn components() -> Vec<ComponentInfo> {
    vec![
        component("MySQL client", cfg!(feature = "mysql"), MYSQL_DRIVER),
        component("Redis client", cfg!(feature = "redis"), REDIS_DRIVER),
    ]
}

const MYSQL_DRIVER: &str = "mysql 25";
const REDIS_DRIVER: &str = "redis 0.27";

fn component(name: &str, loaded: bool, version: &str) -> ComponentInfo {
    ComponentInfo {
        name: name.to_string(),
        loaded,
        version: if loaded { version.to_string() } else { "N/A".to_string() },
    }
}
