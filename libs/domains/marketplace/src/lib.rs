//! Marketplace Notifications Domain
//!
//! Receives marketplace events (item listed, sold, updated), validates them,
//! renders a chat-webhook embed and forwards it to the webhook configured for
//! the event type.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ POST /notify    │  ← type query param + JSON body
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │ NotificationSvc │  ← config check, validation
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │ Document        │  ← diff-aware fields, embed assembly
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │ WebhookProvider │  ← Discord webhook (failures logged, not surfaced)
//! └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_marketplace::{
//!     handlers, DiscordWebhookProvider, NotificationService, WebhookConfig,
//! };
//! use core_config::FromEnv;
//!
//! let service = NotificationService::new(
//!     WebhookConfig::from_env()?,
//!     DiscordWebhookProvider::new(),
//! );
//! let router = handlers::router(service);
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod fields;
pub mod format;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use config::{Destinations, WebhookConfig};
pub use document::{Embed, EmbedField, WebhookMessage, build_embed};
pub use error::{NotificationError, NotificationResult};
pub use fields::{Field, FieldValue, diff_field, diff_field_display};
pub use models::{Acknowledgement, Destination, EventType, ListingUpdates, MarketplaceEvent};
pub use providers::{
    Delivery, DiscordWebhookProvider, RecordingWebhookProvider, WebhookProvider,
};
pub use service::NotificationService;
pub use validation::validate_event;
