//! Routing of reports to their destination webhooks.

use std::sync::Arc;

use super::discord::DiscordWebhook;
use super::report::{ObjectReport, ReportVariant, ThumbnailSet};
use super::reporter::ErrorReporter;
use super::traits::Notifier;
use crate::config::RuntimeConfig;
use crate::error::NotifyError;

/// One notifier and one thumbnail set per [`ReportVariant`].
#[derive(Debug)]
pub struct ReportChannels {
    object_log: Channel,
    all_resources: Channel,
}

#[derive(Debug)]
struct Channel {
    notifier: Option<Arc<dyn Notifier>>,
    thumbnails: ThumbnailSet,
}

impl Channel {
    fn empty(variant: ReportVariant) -> Self {
        Self {
            notifier: None,
            thumbnails: variant.default_thumbnails(),
        }
    }
}

impl Default for ReportChannels {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportChannels {
    /// Create channels with no notifier and the default thumbnails.
    pub fn new() -> Self {
        Self {
            object_log: Channel::empty(ReportVariant::ObjectLog),
            all_resources: Channel::empty(ReportVariant::AllResources),
        }
    }

    /// Build Discord webhooks for every configured channel.
    ///
    /// All webhooks share `client` and report errors through `reporter`.
    pub fn from_config(
        config: &RuntimeConfig,
        client: reqwest::Client,
        reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        let mut channels = Self::new();

        for variant in ReportVariant::ALL {
            let (url, overrides) = match variant {
                ReportVariant::ObjectLog => {
                    (&config.object_log_webhook, &config.thumbnails.object_log)
                }
                ReportVariant::AllResources => (
                    &config.all_resources_webhook,
                    &config.thumbnails.all_resources,
                ),
            };

            let channel = channels.channel_mut(variant);
            channel.thumbnails = variant.default_thumbnails().with_overrides(overrides);

            if let Some(url) = url {
                tracing::debug!(channel = %variant, "Registering Discord webhook");
                channel.notifier = Some(Arc::new(DiscordWebhook::with_client(
                    variant.name(),
                    url.clone(),
                    client.clone(),
                    Arc::clone(&reporter),
                )));
            }
        }

        channels
    }

    pub fn with_notifier(mut self, variant: ReportVariant, notifier: Arc<dyn Notifier>) -> Self {
        self.channel_mut(variant).notifier = Some(notifier);
        self
    }

    pub fn with_thumbnails(mut self, variant: ReportVariant, thumbnails: ThumbnailSet) -> Self {
        self.channel_mut(variant).thumbnails = thumbnails;
        self
    }

    fn channel(&self, variant: ReportVariant) -> &Channel {
        match variant {
            ReportVariant::ObjectLog => &self.object_log,
            ReportVariant::AllResources => &self.all_resources,
        }
    }

    fn channel_mut(&mut self, variant: ReportVariant) -> &mut Channel {
        match variant {
            ReportVariant::ObjectLog => &mut self.object_log,
            ReportVariant::AllResources => &mut self.all_resources,
        }
    }

    /// Get the notifier for a channel.
    ///
    /// # Errors
    /// Returns [`NotifyError::ChannelNotConfigured`] if the channel has no webhook.
    pub fn notifier(&self, variant: ReportVariant) -> Result<&Arc<dyn Notifier>, NotifyError> {
        self.channel(variant)
            .notifier
            .as_ref()
            .ok_or_else(|| NotifyError::ChannelNotConfigured(variant.name().to_string()))
    }

    pub fn thumbnails(&self, variant: ReportVariant) -> &ThumbnailSet {
        &self.channel(variant).thumbnails
    }

    /// Channels that have a webhook.
    pub fn configured(&self) -> Vec<ReportVariant> {
        ReportVariant::ALL
            .into_iter()
            .filter(|v| self.channel(*v).notifier.is_some())
            .collect()
    }

    /// Send a report to the channel's webhook with the channel's thumbnails.
    ///
    /// This is the path that honours `thumbnails:` overrides from the
    /// configuration.
    pub async fn send_report(
        &self,
        variant: ReportVariant,
        report: &ObjectReport,
    ) -> Result<bool, NotifyError> {
        let channel = self.channel(variant);
        let notifier = self.notifier(variant)?;
        notifier.send_object_report(report, &channel.thumbnails).await
    }

    /// Send a plain-text message to the channel's webhook.
    pub async fn send_text(
        &self,
        variant: ReportVariant,
        content: &str,
    ) -> Result<bool, NotifyError> {
        self.notifier(variant)?.send_message(content, None).await
    }
}
