//! Property-based tests for value masking
//!
//! Uses proptest to verify properties that should hold for all inputs.

use diagpage::core::services::{mask, redact};
use proptest::prelude::*;

#[test]
fn test_documented_examples() {
    assert_eq!(mask("MySecretPassword123", 2), "My***************23");
    assert_eq!(mask("abc", 2), "***");
    assert_eq!(mask("abcd", 2), "****");
    assert_eq!(mask("abcde", 2), "ab*de");
    assert_eq!(mask("", 2), "");
}

proptest! {
    /// Masking never changes the character count
    #[test]
    fn mask_preserves_length(value in "\\PC{0,40}", visible in 0usize..8) {
        prop_assert_eq!(mask(&value, visible).chars().count(), value.chars().count());
    }

    /// Short values are fully masked
    #[test]
    fn short_values_fully_masked(visible in 0usize..6, value in "[a-zA-Z0-9]{0,12}") {
        prop_assume!(value.len() <= visible * 2);
        prop_assert_eq!(mask(&value, visible), redact(&value));
        prop_assert!(mask(&value, visible).chars().all(|c| c == '*'));
    }

    /// Long values keep exactly `visible` characters at each end
    #[test]
    fn long_values_keep_both_ends(
        head in "[a-z]{3}",
        middle in "[A-Z0-9]{1,20}",
        tail in "[a-z]{3}",
    ) {
        let value = format!("{head}{middle}{tail}");
        let masked = mask(&value, 3);
        prop_assert!(masked.starts_with(&head));
        prop_assert!(masked.ends_with(&tail));
        let hidden = &masked[3..masked.len() - 3];
        prop_assert_eq!(hidden, "*".repeat(middle.len()));
    }

    /// No middle character survives masking
    #[test]
    fn middle_is_hidden(secret in "[0-9]{8}") {
        let value = format!("xx{secret}yy");
        prop_assert!(!mask(&value, 2).contains(&secret));
    }
}
