// src/lib.rs
//! lokhook - Discord webhook notifications for resources found on the kingdom map.

pub mod cli;
pub mod config;
pub mod error;
pub mod notify;

// Re-export commonly used types
pub use cli::LogFormat;
pub use config::{Config, RuntimeConfig, SecretString};
pub use error::{ConfigError, NotifyError};
pub use notify::{
    DiscordWebhook, Embed, ErrorReporter, Notifier, ObjectReport, ReportChannels, ReportVariant,
    ResourceKind, ThumbnailSet, TracingReporter,
};
