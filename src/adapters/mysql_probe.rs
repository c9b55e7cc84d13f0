//! MySQL probe adapter
//!
//! Opens a fresh connection per probe and drops it when done.

use mysql::prelude::Queryable;
use mysql::{Conn, OptsBuilder};

use crate::config::DatabaseSettings;
use crate::core::ports::{DatabaseInfo, DatabaseProbe, ProbeError};

/// Round-trip query returning the server version and clock
pub const SERVER_INFO_QUERY: &str = "SELECT VERSION() as version, NOW() as server_time";

/// Connection charset
pub const CHARSET: &str = "utf8mb4";

/// Probes MySQL over TCP with the `mysql` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlProbe;

impl MysqlProbe {
    /// Create a new probe
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn options(settings: &DatabaseSettings) -> OptsBuilder {
        OptsBuilder::new()
            .ip_or_hostname(Some(settings.host.as_str()))
            .tcp_port(settings.port)
            .prefer_socket(false)
            .db_name(Some(settings.database.as_str()))
            .user(Some(settings.user.as_str()))
            .pass(Some(settings.password.as_str()))
            .tcp_connect_timeout(Some(settings.timeout))
            .read_timeout(Some(settings.timeout))
            .write_timeout(Some(settings.timeout))
            .init(vec![format!("SET NAMES {CHARSET}")])
    }
}

impl DatabaseProbe for MysqlProbe {
    fn server_info(&self, settings: &DatabaseSettings) -> Result<DatabaseInfo, ProbeError> {
        let mut conn = Conn::new(Self::options(settings))
            .map_err(|e| ProbeError::Connection(e.to_string()))?;

        let row: Option<(String, String)> = conn
            .query_first(SERVER_INFO_QUERY)
            .map_err(|e| ProbeError::Query(e.to_string()))?;

        let (version, server_time) =
            row.ok_or_else(|| ProbeError::Query("server returned no rows".to_string()))?;

        Ok(DatabaseInfo {
            version,
            server_time,
        })
    }
}
