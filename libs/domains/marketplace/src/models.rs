//! Data models for marketplace event notifications.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Discord embed color for listings and sales.
pub const LISTED_COLOR: u32 = 0xDC2626;
/// Discord embed color for listing updates.
pub const UPDATED_COLOR: u32 = 0x8B5CF6;

/// Kind of marketplace event, taken from the `type` query parameter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventType {
    /// A new listing was created.
    List,
    /// A listing was purchased.
    Sold,
    /// An existing listing changed price, quantity or expiry.
    Update,
}

/// Which configured webhook an event is delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Destination {
    Listings,
    Sales,
}

impl EventType {
    pub fn title(&self) -> &'static str {
        match self {
            EventType::List => "Item Listed!",
            EventType::Update => "Item Updated!",
            EventType::Sold => "Item Sold!",
        }
    }

    /// Past-tense verb used in the footer ("Listed on Treasure Marketplace").
    pub fn verb(&self) -> &'static str {
        match self {
            EventType::List => "Listed",
            EventType::Update => "Updated",
            EventType::Sold => "Sold",
        }
    }

    pub fn color(&self) -> u32 {
        match self {
            EventType::Update => UPDATED_COLOR,
            EventType::List | EventType::Sold => LISTED_COLOR,
        }
    }

    pub fn price_label(&self) -> &'static str {
        match self {
            EventType::Sold => "Sale Price",
            EventType::List | EventType::Update => "Listing Price",
        }
    }

    /// Label for the row holding `user`: the buyer of a sale, otherwise the seller.
    pub fn user_label(&self) -> &'static str {
        match self {
            EventType::Sold => "Buyer",
            EventType::List | EventType::Update => "Seller",
        }
    }

    pub fn destination(&self) -> Destination {
        match self {
            EventType::Sold => Destination::Sales,
            EventType::List | EventType::Update => Destination::Listings,
        }
    }
}

/// New values carried by an `update` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingUpdates {
    pub price: String,
    pub quantity: i64,
    /// Epoch milliseconds.
    pub expires: i64,
}

/// A validated marketplace event.
///
/// Top-level `price`, `quantity` and `expires` hold the listing's current
/// (old) values; `updates`, when present, holds the new ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketplaceEvent {
    pub event_type: EventType,
    /// Collection contract address.
    pub address: String,
    pub collection: String,
    pub image: String,
    pub name: String,
    /// Decimal price as text.
    pub price: String,
    pub quantity: i64,
    pub user: String,
    /// Listing expiry in epoch milliseconds.
    pub expires: Option<i64>,
    pub updates: Option<ListingUpdates>,
}

/// Body returned to the caller once the event has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub ok: bool,
}

impl Acknowledgement {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
