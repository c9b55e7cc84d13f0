//! Centralized path definitions for diagpage
//!
//! ## Config file lookup
//!
//! ```text
//! ./diagpage.toml                      # Project-local config (first match wins)
//! ~/.config/diagpage/config.toml       # User-level config (XDG on Linux)
//! ```
//!
//! A `--config` flag on the command line bypasses the lookup entirely.

use std::path::PathBuf;

/// Project-local config filename
pub const LOCAL_CONFIG_FILE: &str = "diagpage.toml";

/// User-level config directory name
const GLOBAL_DIR: &str = "diagpage";

/// User-level config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to `./diagpage.toml`.
#[must_use]
pub fn local_config() -> PathBuf {
    PathBuf::from(LOCAL_CONFIG_FILE)
}

/// Get the user-level config directory.
///
/// Returns `None` when the platform has no config directory.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(GLOBAL_DIR))
}

/// Get the user-level config file path.
#[must_use]
pub fn global_config() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(GLOBAL_CONFIG_FILE))
}

/// Config file locations, in lookup order.
#[must_use]
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![local_config()];
    candidates.extend(global_config());
    candidates
}
