//! Environment lookup port

/// Read-only key/value lookup over configuration state
///
/// Production code reads the process environment; tests inject a map so
/// they never mutate global state.
pub trait EnvSource: Send + Sync {
    /// Look up a key, returning `None` when it is absent
    fn get(&self, key: &str) -> Option<String>;

    /// Look up a key, treating an empty value as absent
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Look up a key, falling back to `default` when absent or empty
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get_non_empty(key).unwrap_or_else(|| default.to_string())
    }
}
