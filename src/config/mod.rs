//! Configuration loading and validation for lokhook.
//!
//! This module handles loading the YAML configuration file,
//! validation, and resolving environment variables for webhook secrets.

mod env;
mod runtime;
mod secret;
mod types;

pub use env::resolve_env_vars;
pub use runtime::RuntimeConfig;
pub use secret::SecretString;
pub use types::{
    Config, DEFAULT_CONFIG_PATH, HttpConfig, ThumbnailOverrides, ThumbnailsConfig,
    WebhooksConfig,
};
