//! Runtime configuration with resolved webhook secrets.

use super::secret::SecretString;
use super::types::{HttpConfig, ThumbnailsConfig};
use crate::error::ConfigError;

/// Runtime configuration, produced by [`super::Config::compile`].
#[derive(Debug)]
pub struct RuntimeConfig {
    pub object_log_webhook: Option<SecretString>,
    pub all_resources_webhook: Option<SecretString>,
    pub http: HttpConfig,
    pub thumbnails: ThumbnailsConfig,
}

impl RuntimeConfig {
    /// Build the HTTP client shared by every webhook.
    ///
    /// # Errors
    /// Returns [`ConfigError::ValidationError`] if the TLS backend cannot be
    /// initialized.
    pub fn http_client(&self) -> Result<reqwest::Client, ConfigError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.http.timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| ConfigError::ValidationError(format!("http client: {}", e)))
    }
}
