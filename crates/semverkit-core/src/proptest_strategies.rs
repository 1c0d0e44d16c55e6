//! Property-based testing strategies for generating test data
//!
//! Strategies for valid identifiers, canonical versions and deliberately
//! malformed field text.

#![cfg(test)]

use crate::auto_build::AutoBuild;
use crate::version::SemVer;
use proptest::collection::vec;
use proptest::prelude::*;

/// Strategy for numeric pre-release identifiers without leading zeros
pub fn numeric_identifier_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("0".to_string()), "[1-9][0-9]{0,5}"]
}

/// Strategy for alphanumeric identifiers (at least one non-digit)
pub fn alphanumeric_identifier_strategy() -> impl Strategy<Value = String> {
    "[0-9]{0,2}[a-zA-Z-][0-9a-zA-Z-]{0,8}"
}

/// Strategy for valid pre-release identifiers
pub fn pre_release_identifier_strategy() -> impl Strategy<Value = String> {
    prop_oneof![numeric_identifier_strategy(), alphanumeric_identifier_strategy()]
}

/// Strategy for valid build identifiers (leading zeros allowed)
pub fn build_identifier_strategy() -> impl Strategy<Value = String> {
    "[0-9a-zA-Z-]{1,10}"
}

/// Strategy for canonical versions with manual build metadata
pub fn semver_strategy() -> impl Strategy<Value = SemVer> {
    (
        0u32..1000,
        0u32..1000,
        0u32..1000,
        vec(pre_release_identifier_strategy(), 0..4),
        vec(build_identifier_strategy(), 0..3),
    )
        .prop_map(|(major, minor, patch, pre, build)| {
            let mut version = SemVer::new(major, minor, patch);
            version.set_pre_release_identifiers(pre);
            version.set_build_identifiers(build);
            version
        })
}

/// Strategy for free-form field text, including empty pieces and stray characters
pub fn field_text_strategy() -> impl Strategy<Value = String> {
    "[0-9a-zA-Z. $!_é-]{0,16}"
}

/// Strategy for auto-build modes
pub fn auto_build_strategy() -> impl Strategy<Value = AutoBuild> {
    prop_oneof![
        Just(AutoBuild::Manual),
        Just(AutoBuild::Timestamp),
        Just(AutoBuild::VcsRevision),
        Just(AutoBuild::CiBuildNumber),
    ]
}

/// Strategy for arbitrary, possibly malformed versions
pub fn malformed_semver_strategy() -> impl Strategy<Value = SemVer> {
    (
        any::<u32>(),
        any::<u32>(),
        any::<u32>(),
        field_text_strategy(),
        field_text_strategy(),
        auto_build_strategy(),
    )
        .prop_map(|(major, minor, patch, pre, build, mode)| {
            SemVer::new(major, minor, patch)
                .with_pre_release(&pre)
                .with_build(&build)
                .with_auto_build(mode)
        })
}

mod tests {
    use super::*;
    use crate::auto_build::BuildEnvironment;
    use crate::parser;
    use chrono::{TimeZone, Utc};

    fn env() -> BuildEnvironment {
        BuildEnvironment::fixed(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
            .with_var("GIT_COMMIT", "0a1b2c3d4e5f")
            .with_var("BUILD_NUMBER", "17")
    }

    proptest! {
        #[test]
        fn prop_round_trip(version in semver_strategy()) {
            let text = version.to_string();
            prop_assert!(parser::is_canonical(&text), "{} is not canonical", text);
            let parsed = SemVer::parse(&text).unwrap();
            prop_assert_eq!(parsed.to_string(), text);
        }

        #[test]
        fn prop_validation_is_idempotent(version in malformed_semver_strategy()) {
            let env = env();
            let first = version.validate_with(&env);
            let second = first.corrected.validate_with(&env);
            prop_assert!(second.is_valid, "{:?}", second.errors);
            prop_assert!(parser::is_canonical(&first.corrected.render_with(&env)));
        }

        #[test]
        fn prop_is_valid_matches_grammar(version in malformed_semver_strategy()) {
            let env = env();
            let result = version.validate_with(&env);
            prop_assert_eq!(result.is_valid, parser::is_canonical(&version.render_with(&env)));
        }

        #[test]
        fn prop_build_is_irrelevant(
            version in semver_strategy(),
            build in vec(build_identifier_strategy(), 0..3),
        ) {
            let mut other = version.clone();
            other.set_build_identifiers(build);
            prop_assert_eq!(version.cmp(&other), std::cmp::Ordering::Equal);
            prop_assert_eq!(&version, &other);
        }

        #[test]
        fn prop_ordering_is_antisymmetric(a in semver_strategy(), b in semver_strategy()) {
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }
    }
}
