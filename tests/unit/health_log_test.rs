//! Tests for the log records emitted by health checks
//!
//! A capturing logger is installed once for the test binary. Tests here are
//! serial and look only for lines carrying their own unique values.

use std::sync::{Mutex, Once};

use diagpage::core::ports::ProbeError;
use diagpage::core::services::{check_cache, check_database};
use diagpage::logging::PROBE_TARGET;
use log::{Level, LevelFilter, Log, Metadata, Record};
use regex::Regex;
use serial_test::serial;

use crate::common::mocks::{
    FailingCacheProbe, MemoryCacheProbe, StaticDatabaseProbe, cache_settings, database_settings,
};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.target() == PROBE_TARGET
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.records.lock().unwrap().push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn captured_after(run: impl FnOnce()) -> Vec<(Level, String)> {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Debug);
    });

    LOGGER.records.lock().unwrap().clear();
    run();
    LOGGER.records.lock().unwrap().clone()
}

fn find<'a>(records: &'a [(Level, String)], needle: &str) -> &'a (Level, String) {
    records
        .iter()
        .find(|(_, line)| line.contains(needle))
        .unwrap_or_else(|| panic!("no record containing {needle:?} in {records:?}"))
}

fn stamped(rest: &str) -> Regex {
    Regex::new(&format!(
        r"^\[\d{{4}}-\d{{2}}-\d{{2}} \d{{2}}:\d{{2}}:\d{{2}}\] {}$",
        regex::escape(rest)
    ))
    .unwrap()
}

#[test]
#[serial]
fn test_database_success_logs_info_with_version() {
    let records = captured_after(|| {
        let probe = StaticDatabaseProbe::up("8.0.36-logcheck", "2024-05-01 10:00:00");
        assert!(check_database(&probe, &database_settings()).is_success());
    });

    let (level, line) = find(&records, "8.0.36-logcheck");
    assert_eq!(*level, Level::Info);
    assert!(
        stamped(r#"INFO: MySQL connection successful {"version":"8.0.36-logcheck"}"#).is_match(line),
        "unexpected line: {line}"
    );
}

#[test]
#[serial]
fn test_database_failure_logs_error_with_message() {
    let records = captured_after(|| {
        let probe = StaticDatabaseProbe::down("refused by logcheck");
        assert!(!check_database(&probe, &database_settings()).is_success());
    });

    let (level, line) = find(&records, "refused by logcheck");
    assert_eq!(*level, Level::Error);
    assert!(
        stamped(r#"ERROR: MySQL connection failed {"error":"connection failed: refused by logcheck"}"#)
            .is_match(line),
        "unexpected line: {line}"
    );
}

#[test]
#[serial]
fn test_cache_success_and_failure_levels() {
    let records = captured_after(|| {
        let _ = check_cache(&MemoryCacheProbe::new(Some("7.2.4-logcheck")), &cache_settings());
        let _ = check_cache(
            &FailingCacheProbe(ProbeError::Query("NOAUTH logcheck".to_string())),
            &cache_settings(),
        );
    });

    let (level, line) = find(&records, "7.2.4-logcheck");
    assert_eq!(*level, Level::Info);
    assert!(line.ends_with(r#"INFO: Redis connection successful {"version":"7.2.4-logcheck"}"#));

    let (level, line) = find(&records, "NOAUTH logcheck");
    assert_eq!(*level, Level::Error);
    assert!(line.ends_with(r#"ERROR: Redis connection failed {"error":"query failed: NOAUTH logcheck"}"#));
}
