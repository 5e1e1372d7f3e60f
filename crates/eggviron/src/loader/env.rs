//! Environment variable helpers for the crate's own settings.
//!
//! Responsibilities:
//! - Read a single environment variable with empty/whitespace filtering.
//! - Decide whether `.env` loading is disabled.
//!
//! Does NOT handle:
//! - Snapshotting the whole environment (see `environ.rs`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use crate::constants::DOTENV_DISABLED_VAR;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Check if dotenv loading is disabled via environment variable.
pub(crate) fn dotenv_disabled() -> bool {
    matches!(
        env_var_or_none(DOTENV_DISABLED_VAR).as_deref(),
        Some("true") | Some("1")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        let key = "_EGGVIRON_TEST_VAR";

        temp_env::with_var_unset(key, || {
            assert!(env_var_or_none(key).is_none(), "Unset env var should return None");
        });

        temp_env::with_var(key, Some(""), || {
            assert!(env_var_or_none(key).is_none(), "Empty env var should return None");
        });

        temp_env::with_var(key, Some("   "), || {
            assert!(
                env_var_or_none(key).is_none(),
                "Whitespace-only env var should return None"
            );
        });

        temp_env::with_var(key, Some(" test-value "), || {
            assert_eq!(env_var_or_none(key), Some("test-value".to_string()));
        });
    }

    #[test]
    #[serial]
    fn test_dotenv_disabled_values() {
        for (value, expected) in [
            (Some("1"), true),
            (Some("true"), true),
            (Some(" true "), true),
            (Some("false"), false),
            (Some("0"), false),
            (Some("yes"), false),
            (None, false),
        ] {
            temp_env::with_var(DOTENV_DISABLED_VAR, value, || {
                assert_eq!(dotenv_disabled(), expected, "DOTENV_DISABLED={value:?}");
            });
        }
    }
}
