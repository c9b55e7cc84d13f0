//! Sensitive value masking
//!
//! Lengths are counted in characters, so masking never splits a UTF-8
//! sequence and the output is always as wide as the input.

use crate::core::models::EnvEntry;

/// Character substituted for hidden positions
pub const MASK_CHAR: char = '*';

/// Visible prefix/suffix length used when callers have no preference
pub const DEFAULT_VISIBLE_CHARS: usize = 2;

/// Variable names containing this marker are always fully redacted
pub const SENSITIVE_MARKER: &str = "PASSWORD";

/// Partially redact `value`, keeping `visible_chars` at each end
///
/// Values no longer than `2 * visible_chars` are fully masked so short
/// secrets never leak a partial prefix.
#[must_use]
pub fn mask(value: &str, visible_chars: usize) -> String {
    let len = value.chars().count();
    if len <= visible_chars.saturating_mul(2) {
        return redact(value);
    }

    let tail_start = len - visible_chars;
    value
        .chars()
        .enumerate()
        .map(|(i, c)| if i < visible_chars || i >= tail_start { c } else { MASK_CHAR })
        .collect()
}

/// Replace every character of `value` with [`MASK_CHAR`]
#[must_use]
pub fn redact(value: &str) -> String {
    std::iter::repeat_n(MASK_CHAR, value.chars().count()).collect()
}

/// Whether a variable name marks its value as a secret
#[must_use]
pub fn is_sensitive_name(name: &str) -> bool {
    name.contains(SENSITIVE_MARKER)
}

/// Build an environment table row, redacting secrets by name
#[must_use]
pub fn env_entry(name: &str, value: Option<String>) -> EnvEntry {
    let sensitive = is_sensitive_name(name);
    EnvEntry {
        name: name.to_string(),
        masked: sensitive && value.is_some(),
        value: value.map(|v| if sensitive { redact(&v) } else { v }),
    }
}
