use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{error, info, instrument};

use crate::config::WebhookConfig;
use crate::document::{WebhookMessage, build_embed};
use crate::error::NotificationResult;
use crate::models::{Acknowledgement, MarketplaceEvent};
use crate::providers::WebhookProvider;
use crate::validation::validate_event;

/// Validates marketplace events, formats them and forwards them to the
/// webhook for their event type.
pub struct NotificationService<P: WebhookProvider> {
    config: WebhookConfig,
    provider: Arc<P>,
}

impl<P: WebhookProvider> Clone for NotificationService<P> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            provider: Arc::clone(&self.provider),
        }
    }
}

impl<P: WebhookProvider> NotificationService<P> {
    pub fn new(config: WebhookConfig, provider: P) -> Self {
        Self {
            config,
            provider: Arc::new(provider),
        }
    }

    /// Handle one inbound event: `raw_type` is the `type` query parameter,
    /// `body` the raw JSON request body.
    ///
    /// Fails on missing webhook configuration (checked first) or invalid
    /// input. Delivery failures do not fail the call.
    pub async fn notify(
        &self,
        raw_type: Option<&str>,
        body: &[u8],
    ) -> NotificationResult<Acknowledgement> {
        self.notify_at(raw_type, body, Utc::now()).await
    }

    /// [`Self::notify`] with an explicit clock for the document's relative
    /// times and footer date.
    #[instrument(skip(self, body, now), fields(event_type = raw_type.unwrap_or_default()))]
    pub async fn notify_at(
        &self,
        raw_type: Option<&str>,
        body: &[u8],
        now: DateTime<Utc>,
    ) -> NotificationResult<Acknowledgement> {
        let destinations = self.config.destinations()?;
        let event = validate_event(raw_type, body)?;

        let destination = event.event_type.destination();
        let url = destinations.url_for(destination);
        let message = WebhookMessage::single(build_embed(&event, now));

        self.dispatch(url, &message, &event).await;

        Ok(Acknowledgement::ok())
    }

    /// Deliver `message`, logging the outcome. Errors stop here on purpose:
    /// the caller is acknowledged whether or not the webhook accepted it.
    async fn dispatch(&self, url: &str, message: &WebhookMessage, event: &MarketplaceEvent) {
        let destination = event.event_type.destination();

        match self.provider.deliver(url, message).await {
            Ok(()) => info!(
                provider = self.provider.name(),
                %destination,
                collection = %event.collection,
                item = %event.name,
                "Marketplace notification delivered"
            ),
            Err(e) => error!(
                provider = self.provider.name(),
                %destination,
                collection = %event.collection,
                item = %event.name,
                error = %e,
                "Failed to deliver marketplace notification"
            ),
        }
    }
}
