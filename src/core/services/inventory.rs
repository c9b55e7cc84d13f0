//! Runtime facts and the environment table shown on the status page

use crate::config::keys;
use crate::core::models::{EnvEntry, RuntimeInfo};
use crate::core::ports::EnvSource;

use super::masker;

/// HTTP server implementation reported on the page
pub const SERVER_SOFTWARE: &str = "tiny_http/0.12";

/// Collect basic runtime information
#[must_use]
pub fn runtime_info(env: &dyn EnvSource) -> RuntimeInfo {
    RuntimeInfo {
        app_name: env.get_or(keys::APP_NAME, env!("CARGO_PKG_NAME")),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        server_software: SERVER_SOFTWARE.to_string(),
        hostname: env.get_or(keys::HOSTNAME, "Unknown"),
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        pid: std::process::id(),
    }
}

/// Build the environment table for `names`, redacting secrets
#[must_use]
pub fn environment_table<S: AsRef<str>>(env: &dyn EnvSource, names: &[S]) -> Vec<EnvEntry> {
    names
        .iter()
        .map(|name| masker::env_entry(name.as_ref(), env.get(name.as_ref())))
        .collect()
}
