//! Property-based tests for normalization and flag building.
//!
//! Uses `proptest` to verify invariants across many random inputs.

use proptest::prelude::*;

use podman_cli_wrapper::domain::command::{cgroupns_flag, env_flags, name_flag, volume_flags};
use podman_cli_wrapper::normalize_image_reference;

// ============================================================================
// normalize_image_reference()
// ============================================================================

proptest! {
    /// A reference without a colon always gains `:latest`.
    #[test]
    fn prop_untagged_reference_gets_latest(image in "[a-z0-9./_-]{0,40}") {
        prop_assert_eq!(normalize_image_reference(&image), format!("{image}:latest"));
    }

    /// Normalization is idempotent.
    #[test]
    fn prop_normalize_is_idempotent(image in "[a-z0-9./_:-]{0,40}") {
        let once = normalize_image_reference(&image);
        prop_assert_eq!(normalize_image_reference(&once), once.clone());
    }

    /// A reference with exactly one colon is returned unchanged.
    #[test]
    fn prop_tagged_reference_unchanged(
        repo in "[a-z0-9./_-]{1,30}",
        tag in "[a-zA-Z0-9._-]{1,20}",
    ) {
        let image = format!("{repo}:{tag}");
        prop_assert_eq!(normalize_image_reference(&image), image);
    }
}

// ============================================================================
// env_flags() / volume_flags()
// ============================================================================

proptest! {
    /// Only single-`=` entries survive, each preceded by `-e`, in input order.
    #[test]
    fn prop_env_flags_keep_exactly_single_delimiter_entries(
        entries in prop::collection::vec("[A-Z=]{0,6}", 0..12),
    ) {
        let tokens = env_flags(&entries);
        let expected: Vec<String> = entries
            .iter()
            .filter(|e| e.matches('=').count() == 1)
            .flat_map(|e| ["-e".to_string(), e.clone()])
            .collect();
        prop_assert_eq!(tokens, expected);
    }

    /// Only single-`:` binds survive, each preceded by `-v`, in input order.
    #[test]
    fn prop_volume_flags_keep_exactly_single_delimiter_entries(
        binds in prop::collection::vec("[a-z/:]{0,8}", 0..12),
    ) {
        let tokens = volume_flags(&binds);
        let expected: Vec<String> = binds
            .iter()
            .filter(|b| b.matches(':').count() == 1)
            .flat_map(|b| ["-v".to_string(), b.clone()])
            .collect();
        prop_assert_eq!(tokens, expected);
    }

    /// Non-empty names and namespaces always yield exactly two tokens.
    #[test]
    fn prop_non_empty_single_flags_yield_two_tokens(value in "[a-z0-9-]{1,20}") {
        prop_assert_eq!(name_flag(&value).len(), 2);
        prop_assert_eq!(cgroupns_flag(&value).len(), 2);
    }
}

#[test]
fn test_documented_malformed_entries_are_dropped() {
    let env: Vec<String> = ["FOO", "A=B=C", ""].iter().map(ToString::to_string).collect();
    assert!(env_flags(&env).is_empty());

    let binds: Vec<String> = ["noColon", "a:b:c"].iter().map(ToString::to_string).collect();
    assert!(volume_flags(&binds).is_empty());
}

#[test]
fn test_empty_single_flags_yield_nothing() {
    assert!(name_flag("").is_empty());
    assert!(cgroupns_flag("").is_empty());
}
