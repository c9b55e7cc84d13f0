//! Environment validation
//!
//! A key counts as missing when it is absent *or* set to the empty string.

use crate::core::models::ValidationResult;
use crate::core::ports::EnvSource;

/// Check that every key in `required_keys` has a non-empty value in `env`
///
/// Missing keys are reported in input order; duplicates are kept.
#[must_use]
pub fn validate<S: AsRef<str>>(env: &dyn EnvSource, required_keys: &[S]) -> ValidationResult {
    let missing = required_keys
        .iter()
        .map(AsRef::as_ref)
        .filter(|key| env.get_non_empty(key).is_none())
        .map(String::from)
        .collect();

    ValidationResult::from_missing(missing)
}
