//! Dependency health checks
//!
//! Each check runs one probe and catches every failure at this boundary,
//! so callers always get a [`HealthCheckResult`] back.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};

use crate::config::{CacheSettings, DatabaseSettings, Settings};
use crate::core::models::{Dependency, HealthCheckResult, HealthReport, LogLevel};
use crate::core::ports::{CacheProbe, DatabaseProbe, ProbeEntry};
use crate::logging::{self, TIMESTAMP_FORMAT};

/// Expiration of the cache test entry
pub const CACHE_TTL_SECS: u64 = 60;

/// Prefix of the cache test key
pub const CACHE_KEY_PREFIX: &str = "diagpage_probe_";

/// Reported when the cache does not expose `redis_version`
pub const UNKNOWN_VERSION: &str = "Unknown";

/// Probe the database and capture its version and clock
#[must_use]
pub fn check_database(probe: &dyn DatabaseProbe, settings: &DatabaseSettings) -> HealthCheckResult {
    log::debug!("Probing MySQL at {}:{}", settings.host, settings.port);

    match probe.server_info(settings) {
        Ok(info) => {
            logging::record(
                LogLevel::Info,
                "MySQL connection successful",
                &logging::context([("version", info.version.as_str())]),
            );
            let mut details = BTreeMap::new();
            details.insert("version".to_string(), info.version);
            details.insert("server_time".to_string(), info.server_time);
            HealthCheckResult::success(Dependency::Database, details)
        },
        Err(e) => {
            let message = e.to_string();
            logging::record(
                LogLevel::Error,
                "MySQL connection failed",
                &logging::context([("error", message.as_str())]),
            );
            HealthCheckResult::failure(Dependency::Database, message)
        },
    }
}

/// Build the cache test entry for a probe started at `now`
#[must_use]
pub fn probe_entry(now: DateTime<Local>) -> ProbeEntry {
    ProbeEntry {
        key: format!("{CACHE_KEY_PREFIX}{}", now.timestamp_millis()),
        value: format!("Probe value - {}", now.format(TIMESTAMP_FORMAT)),
        ttl_secs: CACHE_TTL_SECS,
    }
}

/// Probe the cache with a fresh, time-based test entry
#[must_use]
pub fn check_cache(probe: &dyn CacheProbe, settings: &CacheSettings) -> HealthCheckResult {
    check_cache_with(probe, settings, &probe_entry(Local::now()))
}

/// Probe the cache with a caller-supplied test entry
#[must_use]
pub fn check_cache_with(
    probe: &dyn CacheProbe,
    settings: &CacheSettings,
    entry: &ProbeEntry,
) -> HealthCheckResult {
    log::debug!("Probing Redis at {}:{} with key {}", settings.host, settings.port, entry.key);

    match probe.round_trip(settings, entry) {
        Ok(info) => {
            let version = info.version.unwrap_or_else(|| UNKNOWN_VERSION.to_string());
            logging::record(
                LogLevel::Info,
                "Redis connection successful",
                &logging::context([("version", version.as_str())]),
            );
            let mut details = BTreeMap::new();
            details.insert("version".to_string(), version);
            details.insert("key".to_string(), entry.key.clone());
            details.insert("written".to_string(), entry.value.clone());
            details.insert("read_back".to_string(), info.read_back.unwrap_or_default());
            HealthCheckResult::success(Dependency::Cache, details)
        },
        Err(e) => {
            let message = e.to_string();
            logging::record(
                LogLevel::Error,
                "Redis connection failed",
                &logging::context([("error", message.as_str())]),
            );
            HealthCheckResult::failure(Dependency::Cache, message)
        },
    }
}

/// Probe every dependency
#[must_use]
pub fn check_all(
    database: &dyn DatabaseProbe,
    cache: &dyn CacheProbe,
    settings: &Settings,
) -> HealthReport {
    HealthReport {
        database: check_database(database, &settings.database),
        cache: check_cache(cache, &settings.cache),
    }
}
