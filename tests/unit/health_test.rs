//! Tests for dependency health checks using hand-written probes

use chrono::{Local, TimeZone};
use diagpage::adapters::env::MapEnv;
use diagpage::config::{PageConfig, Settings};
use diagpage::core::models::{CheckStatus, Dependency};
use diagpage::core::ports::ProbeError;
use diagpage::core::services::health::{CACHE_KEY_PREFIX, CACHE_TTL_SECS, UNKNOWN_VERSION};
use diagpage::core::services::{check_all, check_cache, check_database, probe_entry};

use crate::common::mocks::{
    FailingCacheProbe, MemoryCacheProbe, StaticDatabaseProbe, cache_settings, database_settings,
};

#[test]
fn test_database_success_details() {
    let probe = StaticDatabaseProbe::up("8.0.36", "2024-05-01 10:00:00");
    let result = check_database(&probe, &database_settings());

    assert_eq!(result.dependency, Dependency::Database);
    assert_eq!(result.status, CheckStatus::Success);
    assert_eq!(result.detail("version"), Some("8.0.36"));
    assert_eq!(result.detail("server_time"), Some("2024-05-01 10:00:00"));
    assert!(result.error().is_none());
}

#[test]
fn test_database_failure_carries_message() {
    let probe = StaticDatabaseProbe::down("Connection refused (os error 111)");
    let result = check_database(&probe, &database_settings());

    assert_eq!(result.status, CheckStatus::Failure);
    let error = result.error().unwrap();
    assert!(error.contains("Connection refused"));
    assert!(result.detail("version").is_none());
}

#[test]
fn test_cache_round_trip_reads_back_written_value() {
    let probe = MemoryCacheProbe::new(Some("7.2.4"));
    let result = check_cache(&probe, &cache_settings());

    assert!(result.is_success());
    assert_eq!(result.detail("version"), Some("7.2.4"));
    assert_eq!(result.detail("written"), result.detail("read_back"));
    assert!(result.detail("written").unwrap().starts_with("Probe value - "));

    let keys = probe.keys();
    assert_eq!(keys.len(), 1);
    assert!(keys[0].starts_with(CACHE_KEY_PREFIX));
    assert_eq!(result.detail("key"), Some(keys[0].as_str()));
}

#[test]
fn test_cache_version_defaults_to_unknown() {
    let probe = MemoryCacheProbe::new(None);
    let result = check_cache(&probe, &cache_settings());
    assert_eq!(result.detail("version"), Some(UNKNOWN_VERSION));
}

#[test]
fn test_cache_failure() {
    let probe = FailingCacheProbe(ProbeError::Query("NOAUTH Authentication required".into()));
    let result = check_cache(&probe, &cache_settings());
    assert_eq!(result.dependency, Dependency::Cache);
    assert_eq!(result.error(), Some("query failed: NOAUTH Authentication required"));
}

#[test]
fn test_probe_entry_layout() {
    let now = Local.with_ymd_and_hms(2024, 3, 9, 8, 7, 6).unwrap();
    let entry = probe_entry(now);
    assert_eq!(entry.key, format!("{CACHE_KEY_PREFIX}{}", now.timestamp_millis()));
    assert_eq!(entry.value, "Probe value - 2024-03-09 08:07:06");
    assert_eq!(entry.ttl_secs, CACHE_TTL_SECS);
}

#[test]
fn test_report_is_healthy_only_when_both_succeed() {
    let settings = Settings::resolve(&MapEnv::new(), PageConfig::default());
    let cache = MemoryCacheProbe::new(Some("7.2.4"));

    let report = check_all(&StaticDatabaseProbe::up("8.0", "now"), &cache, &settings);
    assert!(report.healthy());
    assert_eq!(report.results().count(), 2);

    let report = check_all(&StaticDatabaseProbe::down("timeout"), &cache, &settings);
    assert!(!report.healthy());
    assert!(report.cache.is_success());
}

#[test]
fn test_result_serializes_with_lowercase_tags() {
    let result = check_database(&StaticDatabaseProbe::down("refused"), &database_settings());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["dependency"], "database");
    assert_eq!(json["status"], "failure");
    assert_eq!(json["details"]["error"], "connection failed: refused");
}
