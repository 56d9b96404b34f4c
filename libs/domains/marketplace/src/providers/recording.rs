//! In-memory provider that records deliveries instead of sending them.

use super::WebhookProvider;
use crate::document::WebhookMessage;
use crate::error::{NotificationError, NotificationResult};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A delivery attempt seen by [`RecordingWebhookProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub url: String,
    pub message: WebhookMessage,
}

/// Captures every delivery attempt. Clones share the same log, so a test can
/// keep a handle after moving the provider into a service.
#[derive(Debug, Clone, Default)]
pub struct RecordingWebhookProvider {
    deliveries: Arc<Mutex<Vec<Delivery>>>,
    failure: Option<String>,
}

impl RecordingWebhookProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose deliveries are recorded and then fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            deliveries: Arc::default(),
            failure: Some(message.into()),
        }
    }

    pub async fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().await.clone()
    }

    pub async fn delivery_count(&self) -> usize {
        self.deliveries.lock().await.len()
    }
}

#[async_trait]
impl WebhookProvider for RecordingWebhookProvider {
    async fn deliver(&self, url: &str, message: &WebhookMessage) -> NotificationResult<()> {
        self.deliveries.lock().await.push(Delivery {
            url: url.to_string(),
            message: message.clone(),
        });

        match &self.failure {
            Some(failure) => Err(NotificationError::Dispatch(failure.clone())),
            None => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> WebhookMessage {
        WebhookMessage { embeds: vec![] }
    }

    #[tokio::test]
    async fn test_records_deliveries_across_clones() {
        let provider = RecordingWebhookProvider::new();
        let handle = provider.clone();

        provider.deliver("https://hook", &message()).await.unwrap();

        assert_eq!(handle.delivery_count().await, 1);
        assert_eq!(handle.deliveries().await[0].url, "https://hook");
    }

    #[tokio::test]
    async fn test_failing_provider_records_then_errors() {
        let provider = RecordingWebhookProvider::failing("connection reset");

        let err = provider.deliver("https://hook", &message()).await.unwrap_err();

        assert!(err.to_string().contains("connection reset"));
        assert_eq!(provider.delivery_count().await, 1);
    }
}
