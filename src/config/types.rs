//! Core configuration types and loading.

use super::env::resolve_env_vars;
use super::runtime::RuntimeConfig;
use super::secret::SecretString;
use crate::error::ConfigError;
use reqwest::Url;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/lokhook/config.yaml";

/// Main configuration structure for lokhook.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Destination webhooks, one per report channel.
    pub webhooks: WebhooksConfig,
    /// HTTP client settings.
    #[serde(default)]
    pub http: HttpConfig,
    /// Thumbnail overrides per report channel.
    #[serde(default)]
    pub thumbnails: ThumbnailsConfig,
}

/// Webhook URLs (support `${ENV_VAR}` substitution).
///
/// Kept as raw strings until [`Config::compile`] resolves them into
/// [`SecretString`]s.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhooksConfig {
    #[serde(default)]
    pub object_log: Option<String>,
    #[serde(default)]
    pub all_resources: Option<String>,
}

impl WebhooksConfig {
    /// Configured webhooks as `(channel name, raw url)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("object_log", self.object_log.as_deref()),
            ("all_resources", self.all_resources.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, url)| url.map(|u| (name, u)))
    }
}

/// HTTP client configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpConfig {
    /// Request timeout. The client default applies when absent.
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

/// Thumbnail overrides for both report channels.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThumbnailsConfig {
    #[serde(default)]
    pub object_log: ThumbnailOverrides,
    #[serde(default)]
    pub all_resources: ThumbnailOverrides,
}

/// Thumbnail URL overrides for the resource kinds that carry one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ThumbnailOverrides {
    #[serde(default)]
    pub crystal_mine: Option<String>,
    #[serde(default)]
    pub dragon_soul_cavern: Option<String>,
}

impl ThumbnailOverrides {
    fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("crystal_mine", self.crystal_mine.as_deref()),
            ("dragon_soul_cavern", self.dragon_soul_cavern.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, url)| url.map(|u| (name, u)))
    }
}

/// Parses `raw` as an absolute http(s) URL.
fn validate_http_url(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("unsupported scheme '{}'", other)),
    }
}

impl Config {
    /// Load configuration from a file path.
    ///
    /// # Errors
    /// Returns [`ConfigError::LoadError`] if the file cannot be read.
    /// Returns [`ConfigError::ValidationError`] if the YAML is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadError(format!("{}: {}", path.display(), e)))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }

    /// Validate webhooks and thumbnail overrides.
    ///
    /// Collects every problem instead of stopping at the first one.
    ///
    /// # Errors
    /// Returns a `Vec<ConfigError>` containing all validation errors found.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if self.webhooks.entries().next().is_none() {
            errors.push(ConfigError::ValidationError(
                "at least one webhook must be configured".to_string(),
            ));
        }

        for (name, raw) in self.webhooks.entries() {
            match resolve_env_vars(raw) {
                Ok(resolved) => {
                    if let Err(message) = validate_http_url(&resolved) {
                        errors.push(ConfigError::InvalidWebhook {
                            name: name.to_string(),
                            message,
                        });
                    }
                }
                Err(e) => errors.push(ConfigError::InvalidWebhook {
                    name: name.to_string(),
                    message: e.to_string(),
                }),
            }
        }

        for (channel, overrides) in [
            ("object_log", &self.thumbnails.object_log),
            ("all_resources", &self.thumbnails.all_resources),
        ] {
            for (kind, url) in overrides.entries() {
                if let Err(message) = validate_http_url(url) {
                    errors.push(ConfigError::ValidationError(format!(
                        "thumbnails.{}.{}: {}",
                        channel, kind, message
                    )));
                }
            }
        }

        if let Some(timeout) = self.http.timeout
            && timeout.is_zero()
        {
            errors.push(ConfigError::ValidationError(
                "http.timeout must be greater than zero".to_string(),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Resolve environment variables and produce the runtime configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidWebhook`] if a webhook URL references an
    /// undefined environment variable.
    pub fn compile(self) -> Result<RuntimeConfig, ConfigError> {
        fn resolve(name: &str, raw: Option<String>) -> Result<Option<SecretString>, ConfigError> {
            raw.map(|r| {
                resolve_env_vars(&r)
                    .map(SecretString::new)
                    .map_err(|e| ConfigError::InvalidWebhook {
                        name: name.to_string(),
                        message: e.to_string(),
                    })
            })
            .transpose()
        }

        Ok(RuntimeConfig {
            object_log_webhook: resolve("object_log", self.webhooks.object_log)?,
            all_resources_webhook: resolve("all_resources", self.webhooks.all_resources)?,
            http: self.http,
            thumbnails: self.thumbnails,
        })
    }
}
