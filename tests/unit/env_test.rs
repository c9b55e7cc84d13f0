//! Tests for the process environment adapter
//!
//! These mutate the real process environment, so they run serially.

use diagpage::adapters::env::ProcessEnv;
use diagpage::core::ports::EnvSource;
use diagpage::core::services::validate;
use serial_test::serial;

const KEY: &str = "DIAGPAGE_TEST_PROCESS_ENV";

fn set(value: &str) {
    // SAFETY: every test touching the environment is #[serial]
    unsafe { std::env::set_var(KEY, value) };
}

fn unset() {
    // SAFETY: every test touching the environment is #[serial]
    unsafe { std::env::remove_var(KEY) };
}

#[test]
#[serial]
fn test_reads_process_variables() {
    set("value");
    assert_eq!(ProcessEnv.get(KEY).as_deref(), Some("value"));
    assert!(validate(&ProcessEnv, &[KEY]).valid);
    unset();
}

#[test]
#[serial]
fn test_empty_variable_is_present_but_not_valid() {
    set("");
    assert_eq!(ProcessEnv.get(KEY).as_deref(), Some(""));
    assert!(ProcessEnv.get_non_empty(KEY).is_none());
    assert_eq!(validate(&ProcessEnv, &[KEY]).missing, vec![KEY]);
    unset();
}

#[test]
#[serial]
fn test_unset_variable_uses_fallback() {
    unset();
    assert!(ProcessEnv.get(KEY).is_none());
    assert_eq!(ProcessEnv.get_or(KEY, "fallback"), "fallback");
}
