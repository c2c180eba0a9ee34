//! Discord webhook notifications for map resource reports.
//!
//! # Architecture
//!
//! ```text
//! ObjectReport -> ResourceKind + ThumbnailSet -> Embed -> Notifier -> webhook
//! ```
//!
//! - [`ObjectReport`] carries what the scanner found
//! - [`ResourceKind::classify`] picks the title and thumbnail slot
//! - [`Notifier`] posts the message; [`DiscordWebhook`] is the HTTP implementation
//! - [`ReportChannels`] routes the two report variants to their webhooks
//!
//! Delivery is a single POST per message. A 204 response means success;
//! anything else is reported through the injected [`ErrorReporter`].

pub mod channels;
pub mod discord;
pub mod payload;
pub mod report;
pub mod reporter;
pub mod traits;

pub use channels::ReportChannels;
pub use discord::DiscordWebhook;
pub use payload::{
    COLOR_AVAILABLE, COLOR_UNAVAILABLE, Embed, EmbedField, EmbedThumbnail, WebhookMessage,
};
pub use report::{ObjectReport, ReportVariant, ResourceKind, ThumbnailSet};
pub use reporter::{ErrorReporter, TracingReporter};
pub use traits::Notifier;
