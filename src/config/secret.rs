//! Secret string wrapper that never appears in logs.

/// Wrapper for secrets that never appears in logs.
///
/// Discord webhook URLs embed their own access token, so anyone who can read
/// the URL can post to the channel. `Debug` and `Display` always show
/// `[REDACTED]`.
///
/// # Example
///
/// ```
/// use lokhook::config::SecretString;
///
/// let secret = SecretString::new("https://discord.com/api/webhooks/1/token".to_string());
/// assert_eq!(format!("{:?}", secret), "[REDACTED]");
/// assert_eq!(secret.expose(), "https://discord.com/api/webhooks/1/token");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(s: String) -> Self {
        SecretString(s)
    }

    /// Exposes the underlying secret value.
    ///
    /// Never pass the result to logging functions.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl std::fmt::Display for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_string_redacts_in_debug_and_display() {
        let secret = SecretString::new("https://discord.com/api/webhooks/42/tok".to_string());

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("webhooks"));
        assert_eq!(debug_output, "[REDACTED]");

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("webhooks"));
        assert_eq!(display_output, "[REDACTED]");

        assert_eq!(secret.expose(), "https://discord.com/api/webhooks/42/tok");
    }

    #[test]
    fn secret_string_redacted_inside_containers() {
        let secret = SecretString::new("https://discord.com/api/webhooks/42/abc123xyz".to_string());

        let representations = [
            format!("{:?}", Some(&secret)),
            format!("{:?}", vec![&secret]),
        ];

        for repr in &representations {
            for pattern in ["webhooks", "abc123xyz", "discord.com"] {
                assert!(
                    !repr.contains(pattern),
                    "found '{}' in output: {}",
                    pattern,
                    repr
                );
            }
        }
    }
}
