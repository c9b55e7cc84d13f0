//! Redis probe adapter
//!
//! Writes a short-lived test key, reads it back and asks the server for
//! its version. One connection per probe.

use crate::config::CacheSettings;
use crate::core::ports::{CacheInfo, CacheProbe, ProbeEntry, ProbeError};

/// `INFO` field carrying the server version
pub const VERSION_FIELD: &str = "redis_version";

/// Probes Redis with the `redis` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct RedisProbe;

impl RedisProbe {
    /// Create a new probe
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Connection URL for `settings`
    #[must_use]
    pub fn url(settings: &CacheSettings) -> String {
        if settings.host.contains(':') {
            format!("redis://[{}]:{}/", settings.host, settings.port)
        } else {
            format!("redis://{}:{}/", settings.host, settings.port)
        }
    }

    fn connect(settings: &CacheSettings) -> Result<redis::Connection, redis::RedisError> {
        let client = redis::Client::open(Self::url(settings))?;
        let con = client.get_connection_with_timeout(settings.timeout)?;
        con.set_read_timeout(Some(settings.timeout))?;
        con.set_write_timeout(Some(settings.timeout))?;
        Ok(con)
    }
}

impl CacheProbe for RedisProbe {
    fn round_trip(
        &self,
        settings: &CacheSettings,
        entry: &ProbeEntry,
    ) -> Result<CacheInfo, ProbeError> {
        let mut con =
            Self::connect(settings).map_err(|e| ProbeError::Connection(e.to_string()))?;

        redis::cmd("SETEX")
            .arg(&entry.key)
            .arg(entry.ttl_secs)
            .arg(&entry.value)
            .query::<()>(&mut con)
            .map_err(|e| ProbeError::Query(e.to_string()))?;

        let read_back: Option<String> = redis::cmd("GET")
            .arg(&entry.key)
            .query(&mut con)
            .map_err(|e| ProbeError::Query(e.to_string()))?;

        let info: String = redis::cmd("INFO")
            .arg("server")
            .query(&mut con)
            .map_err(|e| ProbeError::Query(e.to_string()))?;

        Ok(CacheInfo {
            read_back,
            version: info_field(&info, VERSION_FIELD),
        })
    }
}

/// Extract `field` from an `INFO` reply (`name:value` lines, `#` headers)
#[must_use]
pub fn info_field(info: &str, field: &str) -> Option<String> {
    info.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| *name == field)
        .map(|(_, value)| value.to_string())
}
