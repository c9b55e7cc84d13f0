//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing
//! without real I/O operations.

use std::sync::Mutex;
use std::time::Duration;

use diagpage::config::{CacheSettings, DatabaseSettings};
use diagpage::core::ports::{
    CacheInfo, CacheProbe, DatabaseInfo, DatabaseProbe, ProbeEntry, ProbeError,
};

/// Database probe returning a fixed answer
pub struct StaticDatabaseProbe {
    result: Result<DatabaseInfo, ProbeError>,
}

impl StaticDatabaseProbe {
    pub fn up(version: &str, server_time: &str) -> Self {
        Self {
            result: Ok(DatabaseInfo {
                version: version.to_string(),
                server_time: server_time.to_string(),
            }),
        }
    }

    pub fn down(message: &str) -> Self {
        Self {
            result: Err(ProbeError::Connection(message.to_string())),
        }
    }
}

impl DatabaseProbe for StaticDatabaseProbe {
    fn server_info(&self, _settings: &DatabaseSettings) -> Result<DatabaseInfo, ProbeError> {
        self.result.clone()
    }
}

/// In-memory cache that stores what it is given and records each key
pub struct MemoryCacheProbe {
    version: Option<String>,
    keys: Mutex<Vec<String>>,
}

impl MemoryCacheProbe {
    pub fn new(version: Option<&str>) -> Self {
        Self {
            version: version.map(String::from),
            keys: Mutex::new(Vec::new()),
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }
}

impl CacheProbe for MemoryCacheProbe {
    fn round_trip(
        &self,
        _settings: &CacheSettings,
        entry: &ProbeEntry,
    ) -> Result<CacheInfo, ProbeError> {
        self.keys.lock().unwrap().push(entry.key.clone());
        Ok(CacheInfo {
            read_back: Some(entry.value.clone()),
            version: self.version.clone(),
        })
    }
}

/// Cache probe that always fails the same way
pub struct FailingCacheProbe(pub ProbeError);

impl CacheProbe for FailingCacheProbe {
    fn round_trip(
        &self,
        _settings: &CacheSettings,
        _entry: &ProbeEntry,
    ) -> Result<CacheInfo, ProbeError> {
        Err(self.0.clone())
    }
}

pub fn database_settings() -> DatabaseSettings {
    DatabaseSettings {
        host: "mysql".to_string(),
        port: 3306,
        database: "app_db".to_string(),
        user: "app_user".to_string(),
        password: "app_password".to_string(),
        timeout: Duration::from_secs(1),
    }
}

pub fn cache_settings() -> CacheSettings {
    CacheSettings {
        host: "redis".to_string(),
        port: 6379,
        timeout: Duration::from_secs(1),
    }
}
