//! Database probe port

use serde::Serialize;

use super::ProbeError;
use crate::config::DatabaseSettings;

/// Facts returned by the database round trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseInfo {
    /// Server version string
    pub version: String,
    /// Current server time as reported by the server
    pub server_time: String,
}

/// Connect-and-query round trip against a relational database
#[cfg_attr(test, mockall::automock)]
pub trait DatabaseProbe: Send + Sync {
    /// Connect with `settings` and fetch the server version and time
    fn server_info(&self, settings: &DatabaseSettings) -> Result<DatabaseInfo, ProbeError>;
}
