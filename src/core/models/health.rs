//! Dependency health check results

use std::collections::BTreeMap;

use serde::Serialize;

/// External dependency being probed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dependency {
    /// Relational database (MySQL)
    Database,
    /// Cache store (Redis)
    Cache,
}

impl Dependency {
    /// Human-facing name of the backing service
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Database => "MySQL",
            Self::Cache => "Redis",
        }
    }
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Database => write!(f, "database"),
            Self::Cache => write!(f, "cache"),
        }
    }
}

/// Outcome of a probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The round trip completed
    Success,
    /// Connecting or querying failed
    Failure,
}

/// Result of probing a single dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthCheckResult {
    /// Which dependency was probed
    pub dependency: Dependency,
    /// Whether the probe succeeded
    pub status: CheckStatus,
    /// Captured facts (version, server time) or the error message
    pub details: BTreeMap<String, String>,
}

impl HealthCheckResult {
    /// Successful probe with the captured details
    #[must_use]
    pub const fn success(dependency: Dependency, details: BTreeMap<String, String>) -> Self {
        Self {
            dependency,
            status: CheckStatus::Success,
            details,
        }
    }

    /// Failed probe carrying a single `error` detail
    #[must_use]
    pub fn failure(dependency: Dependency, error: impl Into<String>) -> Self {
        let mut details = BTreeMap::new();
        details.insert("error".to_string(), error.into());
        Self {
            dependency,
            status: CheckStatus::Failure,
            details,
        }
    }

    /// Whether the probe succeeded
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == CheckStatus::Success
    }

    /// Look up a detail by name
    #[must_use]
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).map(String::as_str)
    }

    /// The error message, if the probe failed
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self.status {
            CheckStatus::Failure => self.detail("error"),
            CheckStatus::Success => None,
        }
    }
}

/// Results of probing every dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    /// Database probe result
    pub database: HealthCheckResult,
    /// Cache probe result
    pub cache: HealthCheckResult,
}

impl HealthReport {
    /// True when every dependency answered
    #[must_use]
    pub fn healthy(&self) -> bool {
        self.database.is_success() && self.cache.is_success()
    }

    /// Iterate over the individual results
    pub fn results(&self) -> impl Iterator<Item = &HealthCheckResult> {
        [&self.database, &self.cache].into_iter()
    }
}
