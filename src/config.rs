//! Configuration management
//!
//! Connection settings for the probed dependencies come from the
//! environment (through an [`EnvSource`]). Page and server preferences come
//! from an optional TOML file, see [`PageConfig`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::ports::EnvSource;
use crate::core::services::masker;
use crate::paths;

/// Environment variable names read by diagpage
pub mod keys {
    /// Database host
    pub const MYSQL_HOST: &str = "MYSQL_HOST";
    /// Database port
    pub const MYSQL_PORT: &str = "MYSQL_PORT";
    /// Database schema name
    pub const MYSQL_DATABASE: &str = "MYSQL_DATABASE";
    /// Database user
    pub const MYSQL_USER: &str = "MYSQL_USER";
    /// Database password
    pub const MYSQL_PASSWORD: &str = "MYSQL_PASSWORD";
    /// Cache host
    pub const REDIS_HOST: &str = "REDIS_HOST";
    /// Cache port
    pub const REDIS_PORT: &str = "REDIS_PORT";
    /// Deployment environment (display only)
    pub const APP_ENV: &str = "APP_ENV";
    /// Application name (display only)
    pub const APP_NAME: &str = "APP_NAME";
    /// Debug flag (display only)
    pub const APP_DEBUG: &str = "APP_DEBUG";
    /// Host name of the machine
    pub const HOSTNAME: &str = "HOSTNAME";
}

/// Fallback values used when a variable is unset or empty
pub mod defaults {
    /// Default database host
    pub const MYSQL_HOST: &str = "mysql";
    /// Default database port
    pub const MYSQL_PORT: u16 = 3306;
    /// Default database schema
    pub const MYSQL_DATABASE: &str = "app_db";
    /// Default database user
    pub const MYSQL_USER: &str = "app_user";
    /// Default database password
    pub const MYSQL_PASSWORD: &str = "app_password";
    /// Default cache host
    pub const REDIS_HOST: &str = "redis";
    /// Default cache port
    pub const REDIS_PORT: u16 = 6379;
    /// Default probe timeout in milliseconds
    pub const PROBE_TIMEOUT_MS: u64 = 5_000;
    /// Default bind address for `serve`
    pub const BIND: &str = "0.0.0.0";
    /// Default port for `serve`
    pub const PORT: u16 = 8080;
}

/// Errors raised while loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// The file is not valid TOML for [`PageConfig`]
    #[error("invalid config file {path}: {source}")]
    Parse {
        /// Path that was parsed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
    /// The file parsed but holds a value diagpage cannot use
    #[error("invalid config file {path}: {message}")]
    Invalid {
        /// Path that was parsed
        path: PathBuf,
        /// What is wrong with it
        message: String,
    },
}

// =============================================================================
// CONFIG FILE
// =============================================================================

/// Contents of `diagpage.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Dependency probe settings
    #[serde(default)]
    pub probes: ProbeConfig,
    /// Environment validation and display settings
    #[serde(default)]
    pub environment: EnvironmentConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind() -> String {
    defaults::BIND.to_string()
}

const fn default_port() -> u16 {
    defaults::PORT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

/// Probe settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Timeout applied to connect, read and write, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

const fn default_timeout_ms() -> u64 {
    defaults::PROBE_TIMEOUT_MS
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ProbeConfig {
    /// Timeout as a [`Duration`]
    #[must_use]
    pub const fn timeout(self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Environment validation and display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Keys that must be set to a non-empty value
    #[serde(default)]
    pub required: Vec<String>,
    /// Variables listed in the environment table
    #[serde(default = "default_display")]
    pub display: Vec<String>,
}

fn default_display() -> Vec<String> {
    [
        keys::APP_ENV,
        keys::APP_NAME,
        keys::APP_DEBUG,
        keys::MYSQL_HOST,
        keys::MYSQL_DATABASE,
        keys::MYSQL_USER,
        keys::REDIS_HOST,
        keys::REDIS_PORT,
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            required: Vec::new(),
            display: default_display(),
        }
    }
}

impl PageConfig {
    /// Parse a config file from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate().map_err(|message| ConfigError::Invalid {
            path: path.to_path_buf(),
            message,
        })?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.probes.timeout_ms == 0 {
            return Err("probes.timeout_ms must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load the config from an explicit path, or from the first default
    /// location that exists. Falls back to defaults when no file is found.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match paths::config_candidates().into_iter().find(|p| p.is_file()) {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                Self::load(&path)
            },
            None => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            },
        }
    }
}

// =============================================================================
// CONNECTION SETTINGS
// =============================================================================

/// Database connection parameters
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Schema name
    pub database: String,
    /// User name
    pub user: String,
    /// Password
    pub password: String,
    /// Connect/read/write timeout
    pub timeout: Duration,
}

impl DatabaseSettings {
    /// Resolve settings from the environment, applying defaults
    #[must_use]
    pub fn from_env(env: &dyn EnvSource, timeout: Duration) -> Self {
        Self {
            host: env.get_or(keys::MYSQL_HOST, defaults::MYSQL_HOST),
            port: port_or_default(env, keys::MYSQL_PORT, defaults::MYSQL_PORT),
            database: env.get_or(keys::MYSQL_DATABASE, defaults::MYSQL_DATABASE),
            user: env.get_or(keys::MYSQL_USER, defaults::MYSQL_USER),
            password: env.get_or(keys::MYSQL_PASSWORD, defaults::MYSQL_PASSWORD),
            timeout,
        }
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &masker::redact(&self.password))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Cache connection parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSettings {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Connect/read/write timeout
    pub timeout: Duration,
}

impl CacheSettings {
    /// Resolve settings from the environment, applying defaults
    #[must_use]
    pub fn from_env(env: &dyn EnvSource, timeout: Duration) -> Self {
        Self {
            host: env.get_or(keys::REDIS_HOST, defaults::REDIS_HOST),
            port: port_or_default(env, keys::REDIS_PORT, defaults::REDIS_PORT),
            timeout,
        }
    }
}

/// Everything a page view or CLI command needs
#[derive(Debug, Clone)]
pub struct Settings {
    /// File-backed preferences
    pub page: PageConfig,
    /// Database connection
    pub database: DatabaseSettings,
    /// Cache connection
    pub cache: CacheSettings,
}

impl Settings {
    /// Combine the page config with connection settings from `env`
    #[must_use]
    pub fn resolve(env: &dyn EnvSource, page: PageConfig) -> Self {
        let timeout = page.probes.timeout();
        Self {
            database: DatabaseSettings::from_env(env, timeout),
            cache: CacheSettings::from_env(env, timeout),
            page,
        }
    }
}

fn port_or_default(env: &dyn EnvSource, key: &str, default: u16) -> u16 {
    let Some(raw) = env.get_non_empty(key) else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        log::warn!("Ignoring invalid {key}={raw:?}, using {default}");
        default
    })
}
