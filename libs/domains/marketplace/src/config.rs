//! Webhook destination configuration.

use core_config::{ConfigError, FromEnv, env_optional};

use crate::error::{NotificationError, NotificationResult};
use crate::models::Destination;

pub const LIST_WEBHOOK_VAR: &str = "DISCORD_LIST_WEBHOOK";
pub const SOLD_WEBHOOK_VAR: &str = "DISCORD_SOLD_WEBHOOK";

/// Webhook URLs as read from the environment. Either may be missing; the
/// gap is only reported when a request needs [`WebhookConfig::destinations`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookConfig {
    pub list_url: Option<String>,
    pub sold_url: Option<String>,
}

/// Both webhook URLs, known to be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destinations {
    pub list_url: String,
    pub sold_url: String,
}

impl WebhookConfig {
    pub fn new(list_url: impl Into<String>, sold_url: impl Into<String>) -> Self {
        Self {
            list_url: Some(list_url.into()),
            sold_url: Some(sold_url.into()),
        }
    }

    /// Resolve both destinations, failing if either URL is missing.
    pub fn destinations(&self) -> NotificationResult<Destinations> {
        match (&self.list_url, &self.sold_url) {
            (Some(list_url), Some(sold_url)) => Ok(Destinations {
                list_url: list_url.clone(),
                sold_url: sold_url.clone(),
            }),
            (list_url, sold_url) => {
                let missing: Vec<&str> = [
                    list_url.is_none().then_some(LIST_WEBHOOK_VAR),
                    sold_url.is_none().then_some(SOLD_WEBHOOK_VAR),
                ]
                .into_iter()
                .flatten()
                .collect();

                Err(NotificationError::Configuration(format!(
                    "missing {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

impl Destinations {
    pub fn url_for(&self, destination: Destination) -> &str {
        match destination {
            Destination::Listings => &self.list_url,
            Destination::Sales => &self.sold_url,
        }
    }
}

impl FromEnv for WebhookConfig {
    /// Reads `DISCORD_LIST_WEBHOOK` and `DISCORD_SOLD_WEBHOOK`; blank values
    /// count as unset. Never fails.
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            list_url: env_optional(LIST_WEBHOOK_VAR),
            sold_url: env_optional(SOLD_WEBHOOK_VAR),
        })
    }
}
