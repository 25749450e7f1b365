//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate an SPDX-style identifier that is safe to use as a file name
    pub fn license_id() -> impl Strategy<Value = String> {
        "[A-Za-z0-9][A-Za-z0-9.+-]{0,30}"
            .prop_filter("Identifier must not contain '..'", |s| !s.contains(".."))
    }

    /// Generate an identifier containing a parent-directory token or a path separator
    pub fn unsafe_license_id() -> impl Strategy<Value = String> {
        (
            "[A-Za-z0-9-]{0,8}",
            prop_oneof![Just(".."), Just("/"), Just("\\")],
            "[A-Za-z0-9./\\\\-]{0,8}",
        )
            .prop_map(|(before, token, after)| format!("{before}{token}{after}"))
    }

    /// Generate a short alias name
    pub fn alias() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,15}"
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::registry::cache::is_cacheable_id;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_license_id_generator(id in license_id()) {
            prop_assert!(!id.is_empty());
            prop_assert!(is_cacheable_id(&id));
        }

        #[test]
        fn test_unsafe_license_id_generator(id in unsafe_license_id()) {
            prop_assert!(!is_cacheable_id(&id));
        }

        #[test]
        fn test_alias_generator(alias in alias()) {
            prop_assert!(alias.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }
}
