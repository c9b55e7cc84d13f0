//! Environment and runtime information shown on the status page

use serde::Serialize;

/// One row of the environment variable table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvEntry {
    /// Variable name
    pub name: String,
    /// Display value (`None` when the variable is unset)
    pub value: Option<String>,
    /// Whether the value was redacted
    pub masked: bool,
}

/// Basic runtime facts about the running process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeInfo {
    /// Application name (from `APP_NAME` or the package name)
    pub app_name: String,
    /// Crate version
    pub app_version: String,
    /// HTTP server implementation
    pub server_software: String,
    /// Host name of the machine
    pub hostname: String,
    /// Operating system
    pub os: String,
    /// CPU architecture
    pub arch: String,
    /// Process ID
    pub pid: u32,
}

/// A probe driver compiled into this build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentInfo {
    /// Display name
    pub name: String,
    /// Whether the driver is available
    pub loaded: bool,
    /// Driver version, or `N/A` when not loaded
    pub version: String,
}
