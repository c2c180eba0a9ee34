//! Discord webhook notifier implementation.
//!
//! Implements the `Notifier` trait for posting messages to a Discord
//! "execute webhook" endpoint. One attempt per message, no retry.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use tracing::Instrument;

use super::payload::{Embed, WebhookMessage};
use super::reporter::{ErrorReporter, TracingReporter};
use super::traits::Notifier;
use crate::config::SecretString;
use crate::error::NotifyError;

/// Discord webhook notifier.
///
/// # Delivery Policy
///
/// - **204 No Content**: success, returns `Ok(true)`
/// - **Any other status**: reported with status and body, returns `Ok(false)`
/// - **Network errors**: reported, returns `Err(NotifyError::Transport)`,
///   including a failure to read the body of a non-204 response
///
/// # Example
///
/// ```ignore
/// let webhook = DiscordWebhook::new("object_log", SecretString::new(url));
/// let report = ObjectReport::new("Crystal Mine", 20100105, 3, "(512, 768)", "Available");
/// webhook.send_object_log(&report).await?;
/// ```
pub struct DiscordWebhook {
    /// Unique name for this notifier instance.
    name: String,
    /// Webhook URL, token included.
    url: SecretString,
    /// HTTP client (connection pooling across sends).
    client: reqwest::Client,
    reporter: Arc<dyn ErrorReporter>,
}

impl DiscordWebhook {
    /// Create a webhook with its own HTTP client and a tracing reporter.
    pub fn new(name: impl Into<String>, url: SecretString) -> Self {
        Self::with_client(name, url, reqwest::Client::new(), Arc::new(TracingReporter))
    }

    /// Create a webhook sharing `client` and reporting through `reporter`.
    pub fn with_client(
        name: impl Into<String>,
        url: SecretString,
        client: reqwest::Client,
        reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        Self {
            name: name.into(),
            url,
            client,
            reporter,
        }
    }

    fn record_failure(&self) {
        metrics::counter!(
            "lokhook_messages_failed_total",
            "notifier_name" => self.name.clone()
        )
        .increment(1);
    }
}

#[async_trait]
impl Notifier for DiscordWebhook {
    fn name(&self) -> &str {
        &self.name
    }

    async fn send_message(
        &self,
        content: &str,
        embed: Option<&Embed>,
    ) -> Result<bool, NotifyError> {
        let span = tracing::info_span!("send_discord", notifier_name = %self.name);

        async {
            let body = serde_json::to_vec(&WebhookMessage::new(content, embed))
                .map_err(|e| NotifyError::Serialization(e.to_string()))?;
            tracing::trace!(body_len = body.len(), "Request body built");

            let response = match self
                .client
                .post(self.url.expose())
                .header(CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    let err = NotifyError::from(e);
                    self.reporter
                        .report_error(&format!("Failed to send Discord webhook: {}", err));
                    self.record_failure();
                    return Err(err);
                }
            };

            let status = response.status();
            if status != StatusCode::NO_CONTENT {
                let text = match response.text().await {
                    Ok(text) => text,
                    Err(e) => {
                        let err = NotifyError::from(e);
                        self.reporter.report_error(&format!(
                            "Failed to read Discord webhook response: {} {}",
                            status.as_u16(),
                            err
                        ));
                        self.record_failure();
                        return Err(err);
                    }
                };
                self.reporter.report_error(&format!(
                    "Failed to send Discord webhook: {} {}",
                    status.as_u16(),
                    text
                ));
                self.record_failure();
                return Ok(false);
            }

            tracing::debug!("Discord message sent");
            metrics::counter!(
                "lokhook_messages_sent_total",
                "notifier_name" => self.name.clone()
            )
            .increment(1);
            Ok(true)
        }
        .instrument(span)
        .await
    }
}

impl std::fmt::Debug for DiscordWebhook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The URL carries the webhook token
        f.debug_struct("DiscordWebhook")
            .field("name", &self.name)
            .finish()
    }
}
