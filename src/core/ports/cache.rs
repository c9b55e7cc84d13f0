//! Cache probe port

use serde::Serialize;

use super::ProbeError;
use crate::config::CacheSettings;

/// Test entry written during the cache round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeEntry {
    /// Unique key
    pub key: String,
    /// Value to write
    pub value: String,
    /// Expiration in seconds
    pub ttl_secs: u64,
}

/// Facts returned by the cache round trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheInfo {
    /// Value read back after the write (`None` if the key vanished)
    pub read_back: Option<String>,
    /// Server version from `INFO server`, if reported
    pub version: Option<String>,
}

/// Write-then-read round trip against a cache store
#[cfg_attr(test, mockall::automock)]
pub trait CacheProbe: Send + Sync {
    /// Connect with `settings`, write `entry`, read it back and fetch server info
    fn round_trip(
        &self,
        settings: &CacheSettings,
        entry: &ProbeEntry,
    ) -> Result<CacheInfo, ProbeError>;
}
