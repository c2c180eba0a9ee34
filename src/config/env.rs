//! Environment variable substitution.

use crate::error::ConfigError;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static ENV_VAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid regex")
});

/// Resolves `${VAR_NAME}` patterns in a string.
///
/// Every undefined variable is listed in the returned error, so a single
/// validation run reports all of them. Substituted values are inserted as-is
/// and never scanned again.
pub fn resolve_env_vars(value: &str) -> Result<String, ConfigError> {
    let mut errors = Vec::new();

    let result = ENV_VAR_REGEX.replace_all(value, |caps: &Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| {
            errors.push(var_name.to_string());
            String::new()
        })
    });

    if errors.is_empty() {
        Ok(result.into_owned())
    } else {
        Err(ConfigError::ValidationError(format!(
            "undefined environment variable{}: {}",
            if errors.len() > 1 { "s" } else { "" },
            errors.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn resolve_env_vars_substitutes_single_variable() {
        temp_env::with_var(
            "TEST_WEBHOOK_VAR",
            Some("https://discord.com/api/webhooks/1/abc"),
            || {
                let result = resolve_env_vars("${TEST_WEBHOOK_VAR}");
                assert_eq!(result.unwrap(), "https://discord.com/api/webhooks/1/abc");
            },
        );
    }

    #[test]
    #[serial]
    fn resolve_env_vars_substitutes_multiple_variables() {
        temp_env::with_vars(
            [
                ("TEST_WEBHOOK_ID", Some("1351881630825840725")),
                ("TEST_WEBHOOK_TOKEN", Some("secret123")),
            ],
            || {
                let result = resolve_env_vars(
                    "https://discord.com/api/webhooks/${TEST_WEBHOOK_ID}/${TEST_WEBHOOK_TOKEN}",
                );
                assert_eq!(
                    result.unwrap(),
                    "https://discord.com/api/webhooks/1351881630825840725/secret123"
                );
            },
        );
    }

    #[test]
    fn resolve_env_vars_returns_unchanged_without_pattern() {
        let input = "https://discord.com/api/webhooks/static";
        let result = resolve_env_vars(input);
        assert_eq!(result.unwrap(), input);
    }

    #[test]
    #[serial]
    fn resolve_env_vars_error_lists_all_undefined_variables() {
        temp_env::with_vars(
            [("UNDEFINED_A", None::<&str>), ("UNDEFINED_B", None::<&str>)],
            || {
                let err = resolve_env_vars("${UNDEFINED_A} and ${UNDEFINED_B}").unwrap_err();
                let msg = err.to_string();
                assert!(msg.contains("variables"));
                assert!(msg.contains("UNDEFINED_A"));
                assert!(msg.contains("UNDEFINED_B"));
            },
        );
    }

    #[test]
    #[serial]
    fn resolve_env_vars_preserves_text_around_variables() {
        temp_env::with_var("TEST_MIDDLE", Some("REPLACED"), || {
            let result = resolve_env_vars("prefix_${TEST_MIDDLE}_suffix");
            assert_eq!(result.unwrap(), "prefix_REPLACED_suffix");
        });
    }

    #[test]
    #[serial]
    fn resolve_env_vars_does_not_expand_substituted_values() {
        temp_env::with_vars(
            [
                ("TEST_LITERAL_VAR", Some("https://example.com/${TEST_OTHER_VAR}")),
                ("TEST_OTHER_VAR", Some("expanded")),
            ],
            || {
                let result = resolve_env_vars("${TEST_LITERAL_VAR}/${TEST_OTHER_VAR}");
                assert_eq!(
                    result.unwrap(),
                    "https://example.com/${TEST_OTHER_VAR}/expanded"
                );
            },
        );
    }

    #[test]
    #[serial]
    fn resolve_env_vars_handles_empty_env_value() {
        temp_env::with_var("TEST_EMPTY_VAR", Some(""), || {
            let result = resolve_env_vars("before${TEST_EMPTY_VAR}after");
            assert_eq!(result.unwrap(), "beforeafter");
        });
    }
}
