//! Notifier trait definition.

use async_trait::async_trait;

use super::payload::Embed;
use super::report::{ObjectReport, ReportVariant, ThumbnailSet};
use crate::error::NotifyError;

/// A destination that accepts webhook messages.
///
/// Only [`send_message`](Notifier::send_message) talks to the network; the
/// report operations build an embed and delegate to it, so they behave the
/// same for every implementation.
///
/// # Returns
///
/// * `Ok(true)` - The endpoint accepted the message
/// * `Ok(false)` - The endpoint answered with an unexpected status (already reported)
/// * `Err(NotifyError)` - The request could not be delivered
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Unique name of this notifier instance (e.g., "object_log").
    fn name(&self) -> &str;

    /// Post `content` with an optional embed.
    async fn send_message(&self, content: &str, embed: Option<&Embed>)
    -> Result<bool, NotifyError>;

    /// Send a report using the given thumbnail set. Content is always empty.
    async fn send_object_report(
        &self,
        report: &ObjectReport,
        thumbnails: &ThumbnailSet,
    ) -> Result<bool, NotifyError> {
        let embed = report.to_embed(thumbnails);
        self.send_message("", Some(&embed)).await
    }

    /// Send a report with the built-in object-log thumbnails.
    ///
    /// Configured thumbnail overrides are not applied here; use
    /// [`ReportChannels::send_report`](super::ReportChannels::send_report)
    /// to send with the channel's configured set.
    async fn send_object_log(&self, report: &ObjectReport) -> Result<bool, NotifyError> {
        self.send_object_report(report, &ReportVariant::ObjectLog.default_thumbnails())
            .await
    }

    /// Send a report with the built-in all-resources thumbnails.
    ///
    /// Like [`send_object_log`](Notifier::send_object_log), this ignores
    /// configured overrides.
    async fn send_all_resources(&self, report: &ObjectReport) -> Result<bool, NotifyError> {
        self.send_object_report(report, &ReportVariant::AllResources.default_thumbnails())
            .await
    }
}

impl std::fmt::Debug for dyn Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("name", &self.name())
            .finish()
    }
}
