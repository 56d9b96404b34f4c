//! Discord-compatible webhook provider.

use super::WebhookProvider;
use crate::document::WebhookMessage;
use crate::error::{NotificationError, NotificationResult};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Longest slice of an error response body kept in the error message.
const ERROR_BODY_LIMIT: usize = 512;

/// Posts messages as JSON with a shared, pooled `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct DiscordWebhookProvider {
    client: Client,
}

impl DiscordWebhookProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WebhookProvider for DiscordWebhookProvider {
    async fn deliver(&self, url: &str, message: &WebhookMessage) -> NotificationResult<()> {
        debug!(embeds = message.embeds.len(), "Posting webhook message");

        let response = self.client.post(url).json(message).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let mut body = response.text().await.unwrap_or_default();
        if body.len() > ERROR_BODY_LIMIT {
            let cut = (0..=ERROR_BODY_LIMIT)
                .rev()
                .find(|i| body.is_char_boundary(*i))
                .unwrap_or(0);
            body.truncate(cut);
        }

        Err(NotificationError::Rejected {
            status: status.as_u16(),
            body,
        })
    }

    fn name(&self) -> &'static str {
        "discord"
    }
}
