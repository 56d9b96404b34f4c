//! Webhook delivery providers.
//!
//! `WebhookProvider` is the seam between the notification service and the
//! outside world: the service hands over a finished message and a URL, the
//! provider performs the POST.

mod discord;
mod recording;

pub use discord::DiscordWebhookProvider;
pub use recording::{Delivery, RecordingWebhookProvider};

use crate::document::WebhookMessage;
use crate::error::NotificationResult;
use async_trait::async_trait;

/// Trait for outbound webhook delivery.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebhookProvider: Send + Sync {
    /// POST `message` to `url`. Network failures and non-2xx answers are
    /// errors; nothing is retried.
    async fn deliver(&self, url: &str, message: &WebhookMessage) -> NotificationResult<()>;

    /// Provider name for logging.
    fn name(&self) -> &'static str;
}
