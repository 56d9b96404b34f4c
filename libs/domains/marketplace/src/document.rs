//! Assembly of the chat-webhook notification document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fields::{Field, FieldValue, diff_field, diff_field_display};
use crate::format::{format_date, format_price, format_quantity, format_relative};
use crate::models::MarketplaceEvent;

/// Public marketplace front end, used for collection links.
pub const MARKETPLACE_URL: &str = "https://marketplace.treasure.lol";
/// Icon shown next to the footer text.
pub const FOOTER_ICON_URL: &str = "https://marketplace.treasure.lol/favicon-32x32.png";

/// Outbound webhook body: `{"embeds": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub embeds: Vec<Embed>,
}

impl WebhookMessage {
    pub fn single(embed: Embed) -> Self {
        Self {
            embeds: vec![embed],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    pub color: u32,
    pub title: String,
    pub thumbnail: Thumbnail,
    pub fields: Vec<EmbedField>,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub text: String,
    pub icon_url: String,
}

impl Embed {
    /// Value of the first field called `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }
}

/// Rows for `event` in display order. Absent rows are kept so the order is
/// visible; [`build_embed`] drops them.
pub fn build_fields(event: &MarketplaceEvent, now: DateTime<Utc>) -> Vec<Field> {
    let event_type = event.event_type;
    let updates = event.updates.as_ref();

    let price = Field::new(event_type.price_label(), format_price(&event.price));
    let price = match updates {
        Some(updates) => diff_field(
            event.price.as_str(),
            updates.price.as_str(),
            price,
            format_price,
        ),
        None => price,
    };

    let quantity = Field::new("Quantity", format_quantity(&event.quantity));
    let quantity = match updates {
        Some(updates) => diff_field_display(&event.quantity, &updates.quantity, quantity),
        None => quantity,
    };

    let relative = |at: &i64| format_relative(*at, now);
    let expires = match (event.expires, updates) {
        (Some(expires), Some(updates)) => diff_field(
            &expires,
            &updates.expires,
            Field::new("Expires", relative(&expires)),
            relative,
        ),
        (Some(expires), None) => Field::new("Expires", relative(&expires)),
        (None, _) => Field::absent("Expires"),
    };

    vec![
        Field::new("Name", event.name.as_str()),
        Field::new(
            "Collection",
            format!(
                "[{}]({MARKETPLACE_URL}/collection/{})",
                event.collection, event.address
            ),
        ),
        price,
        quantity,
        expires,
        Field::new(event_type.user_label(), event.user.as_str()),
    ]
}

/// Build the embed for `event`, stamping the footer with `now`.
pub fn build_embed(event: &MarketplaceEvent, now: DateTime<Utc>) -> Embed {
    let fields = build_fields(event, now)
        .into_iter()
        .filter_map(|field| match field.value {
            FieldValue::Present(value) => Some(EmbedField {
                name: field.name,
                value,
            }),
            FieldValue::Absent => None,
        })
        .collect();

    Embed {
        color: event.event_type.color(),
        title: event.event_type.title().to_string(),
        thumbnail: Thumbnail {
            url: event.image.clone(),
        },
        fields,
        footer: Footer {
            text: format!(
                "{} on Treasure Marketplace • {}",
                event.event_type.verb(),
                format_date(now)
            ),
            icon_url: FOOTER_ICON_URL.to_string(),
        },
    }
}
