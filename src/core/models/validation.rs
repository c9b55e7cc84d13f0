//! Environment validation result

use serde::Serialize;

/// Outcome of validating a list of required environment keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// True iff `missing` is empty
    pub valid: bool,
    /// Keys that were absent or empty, in input order
    pub missing: Vec<String>,
}

impl ValidationResult {
    /// Build a result from the list of missing keys
    #[must_use]
    pub fn from_missing(missing: Vec<String>) -> Self {
        Self {
            valid: missing.is_empty(),
            missing,
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::from_missing(Vec::new())
    }
}
