//! Closed vocabularies shared by listings and catalog products.
//!
//! Each enum knows its wire value (the lowercase token used in storage and
//! `<select>` values) and the translation key for its label.

#[cfg(test)]
#[path = "taxonomy_test.rs"]
mod taxonomy_test;

use serde::{Deserialize, Serialize};

/// Product category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Fashion,
    Home,
    Collectibles,
    Vehicles,
    Books,
    Sports,
    Toys,
}

impl Category {
    pub const ALL: [Self; 8] = [
        Self::Electronics,
        Self::Fashion,
        Self::Home,
        Self::Collectibles,
        Self::Vehicles,
        Self::Books,
        Self::Sports,
        Self::Toys,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Fashion => "fashion",
            Self::Home => "home",
            Self::Collectibles => "collectibles",
            Self::Vehicles => "vehicles",
            Self::Books => "books",
            Self::Sports => "sports",
            Self::Toys => "toys",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::Electronics => "category.electronics",
            Self::Fashion => "category.fashion",
            Self::Home => "category.home",
            Self::Collectibles => "category.collectibles",
            Self::Vehicles => "category.vehicles",
            Self::Books => "category.books",
            Self::Sports => "category.sports",
            Self::Toys => "category.toys",
        }
    }
}

/// Item condition as declared by the seller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    New,
    LikeNew,
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const ALL: [Self; 6] = [Self::New, Self::LikeNew, Self::Excellent, Self::Good, Self::Fair, Self::Poor];

    pub fn value(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::LikeNew => "like-new",
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::New => "condition.new",
            Self::LikeNew => "condition.likeNew",
            Self::Excellent => "condition.excellent",
            Self::Good => "condition.good",
            Self::Fair => "condition.fair",
            Self::Poor => "condition.poor",
        }
    }
}

/// Transaction mode of a listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Auction,
    #[default]
    Fixed,
    Trade,
}

impl ListingType {
    pub const ALL: [Self; 3] = [Self::Fixed, Self::Auction, Self::Trade];

    pub fn value(self) -> &'static str {
        match self {
            Self::Auction => "auction",
            Self::Fixed => "fixed",
            Self::Trade => "trade",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::Auction => "type.auction",
            Self::Fixed => "type.fixed",
            Self::Trade => "type.trade",
        }
    }
}

/// Auction length in days.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuctionDuration {
    OneDay,
    ThreeDays,
    FiveDays,
    #[default]
    SevenDays,
    TenDays,
}

impl AuctionDuration {
    pub const ALL: [Self; 5] = [Self::OneDay, Self::ThreeDays, Self::FiveDays, Self::SevenDays, Self::TenDays];

    pub fn days(self) -> u32 {
        match self {
            Self::OneDay => 1,
            Self::ThreeDays => 3,
            Self::FiveDays => 5,
            Self::SevenDays => 7,
            Self::TenDays => 10,
        }
    }

    pub fn from_days(days: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.days() == days)
    }
}

/// Delivery method offered by the seller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingOption {
    Standard,
    Express,
    Overnight,
    Pickup,
}

impl ShippingOption {
    pub const ALL: [Self; 4] = [Self::Standard, Self::Express, Self::Overnight, Self::Pickup];

    pub fn label_key(self) -> &'static str {
        match self {
            Self::Standard => "shipping.standard",
            Self::Express => "shipping.express",
            Self::Overnight => "shipping.overnight",
            Self::Pickup => "shipping.pickup",
        }
    }

    pub fn fee(self) -> &'static str {
        match self {
            Self::Standard | Self::Pickup => "Free",
            Self::Express => "$9.99",
            Self::Overnight => "$24.99",
        }
    }
}
