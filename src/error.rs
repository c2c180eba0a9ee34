//! Centralized error types for lokhook using thiserror.

use thiserror::Error;

/// Errors related to configuration loading and validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load config file: {0}")]
    LoadError(String),
    #[error("invalid configuration: {0}")]
    ValidationError(String),
    #[error("invalid webhook '{name}': {message}")]
    InvalidWebhook { name: String, message: String },
}

/// Errors related to webhook delivery.
///
/// A non-204 response is not an error: it is reported and surfaces as
/// `Ok(false)` from the send operations.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("failed to serialize payload: {0}")]
    Serialization(String),
    #[error("no webhook configured for channel '{0}'")]
    ChannelNotConfigured(String),
}

impl From<reqwest::Error> for NotifyError {
    fn from(e: reqwest::Error) -> Self {
        // The webhook URL carries its token
        NotifyError::Transport(error_chain(&e.without_url()))
    }
}

/// Render an error followed by each of its sources, separated by `": "`.
pub(crate) fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
