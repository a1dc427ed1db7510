//! Product catalog and the browse filter.
//!
//! DESIGN
//! ======
//! Products are read-only. `filter_products` is a pure function of the
//! product slice, the search query and the category selector; the browse page
//! wraps it in a `Memo` so it recomputes only when one of those changes.
//! The result keeps catalog order. There is no sort step.
//!
//! The product page shows more than a card does: a description, shipping and
//! return terms, and for auctions a read-only bid history. These are derived
//! from the product itself, not stored, so server and browser renders agree.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

use crate::state::taxonomy::{Category, Condition, ListingType};
use crate::util::countdown::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE};

/// How a product is being sold, with the fields each mode needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProductKind {
    Fixed,
    Auction {
        current_bid: u32,
        /// Milliseconds since the Unix epoch.
        end_time: i64,
    },
    Trade {
        trade_for: String,
    },
}

impl ProductKind {
    pub fn listing_type(&self) -> ListingType {
        match self {
            Self::Fixed => ListingType::Fixed,
            Self::Auction { .. } => ListingType::Auction,
            Self::Trade { .. } => ListingType::Trade,
        }
    }
}

/// A catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    /// Whole dollars. Buy-now price, reserve or estimated value by kind.
    pub price: u32,
    #[serde(flatten)]
    pub kind: ProductKind,
    pub category: Category,
    pub seller: String,
    pub rating: f32,
    #[serde(default)]
    pub featured: bool,
    pub images: Vec<String>,
    #[serde(default)]
    pub views: u32,
    /// Watchers other than the current visitor.
    #[serde(default)]
    pub watchers: u32,
}

/// Seller-facing details shown in the product page tabs.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDetails {
    pub description: String,
    pub condition: Condition,
    pub location: &'static str,
    pub shipping: &'static str,
    pub returns: &'static str,
    pub seller_since: u16,
}

/// One entry in an auction's bid history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    pub bidder: String,
    /// Whole dollars.
    pub amount: u32,
    /// Milliseconds since the Unix epoch.
    pub placed_at: i64,
}

const DEMO_LOCATION: &str = "New York, NY";
const DEMO_SHIPPING: &str = "Free shipping within US. International shipping available.";
const DEMO_RETURNS: &str = "30-day return policy. Item must be in original condition.";
const DEMO_SELLER_SINCE: u16 = 2020;

/// Bidder, amount below the current bid, and how long ago; newest first.
const DEMO_BIDS: [(&str, u32, i64); 3] = [
    ("BidderPro", 0, 30 * MS_PER_MINUTE),
    ("CollectorX", 100, 2 * MS_PER_HOUR),
    ("AuctionKing", 250, 4 * MS_PER_HOUR),
];

impl Product {
    /// First image, used as the card thumbnail.
    pub fn main_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn end_time(&self) -> Option<i64> {
        match self.kind {
            ProductKind::Auction { end_time, .. } => Some(end_time),
            _ => None,
        }
    }

    pub fn details(&self) -> ProductDetails {
        ProductDetails {
            description: format!(
                "This is a premium {} in excellent condition. Perfect for collectors and enthusiasts alike. \
                 The item has been carefully maintained and comes with all original accessories.",
                self.title.to_lowercase()
            ),
            condition: Condition::Excellent,
            location: DEMO_LOCATION,
            shipping: DEMO_SHIPPING,
            returns: DEMO_RETURNS,
            seller_since: DEMO_SELLER_SINCE,
        }
    }

    /// Recent bids, newest first. Empty unless the product is an auction.
    pub fn bid_history(&self, now_ms: i64) -> Vec<Bid> {
        let ProductKind::Auction { current_bid, .. } = self.kind else {
            return Vec::new();
        };
        DEMO_BIDS
            .iter()
            .map(|&(bidder, below, age)| Bid {
                bidder: bidder.to_owned(),
                amount: current_bid.saturating_sub(below),
                placed_at: now_ms - age,
            })
            .collect()
    }
}

/// Category selector on the browse page: everything, or one category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a selector value; `"all"` and unknown values select everything.
    pub fn from_value(value: &str) -> Self {
        Category::from_value(value).map_or(Self::All, Self::Only)
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.value(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

/// Case-insensitive substring match of `query` in `title`. An empty query
/// matches every title.
pub fn title_matches(title: &str, query: &str) -> bool {
    title.to_lowercase().contains(&query.to_lowercase())
}

/// Keep products whose title contains `query` (case-insensitive) and whose
/// category passes `category`. Input order is preserved.
pub fn filter_products<'a>(products: &'a [Product], query: &str, category: CategoryFilter) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| category.matches(p.category) && title_matches(&p.title, query))
        .collect()
}

/// Read-only product collection provided to the view tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
}

impl CatalogState {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn find(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.featured)
    }
}

/// Demo catalog. Auction end times are relative to `now_ms`.
pub fn mock_products(now_ms: i64) -> Vec<Product> {
    vec![
        Product {
            id: 1,
            title: "Vintage Rolex Submariner".to_owned(),
            price: 8500,
            kind: ProductKind::Auction { current_bid: 7200, end_time: now_ms + 2 * MS_PER_DAY },
            category: Category::Collectibles,
            seller: "WatchCollector".to_owned(),
            rating: 4.9,
            featured: true,
            images: vec!["/luxury-watch.jpg".to_owned()],
            views: 234,
            watchers: 12,
        },
        Product {
            id: 2,
            title: "MacBook Pro M3 16-inch".to_owned(),
            price: 2499,
            kind: ProductKind::Fixed,
            category: Category::Electronics,
            seller: "TechDeals".to_owned(),
            rating: 4.8,
            featured: false,
            images: vec!["/silver-macbook-on-desk.png".to_owned()],
            views: 156,
            watchers: 8,
        },
        Product {
            id: 3,
            title: "Designer Leather Jacket".to_owned(),
            price: 450,
            kind: ProductKind::Trade { trade_for: "Vintage denim jacket or similar".to_owned() },
            category: Category::Fashion,
            seller: "Fashionista".to_owned(),
            rating: 4.7,
            featured: false,
            images: vec!["/classic-leather-jacket.png".to_owned()],
            views: 89,
            watchers: 5,
        },
        Product {
            id: 4,
            title: "Rare Pokemon Card Collection".to_owned(),
            price: 1200,
            kind: ProductKind::Auction { current_bid: 950, end_time: now_ms + 5 * MS_PER_HOUR },
            category: Category::Collectibles,
            seller: "CardMaster".to_owned(),
            rating: 4.9,
            featured: true,
            images: vec!["/pokemon-cards.jpg".to_owned()],
            views: 312,
            watchers: 21,
        },
        Product {
            id: 5,
            title: "Minimalist Dining Set".to_owned(),
            price: 899,
            kind: ProductKind::Fixed,
            category: Category::Home,
            seller: "HomeDesign".to_owned(),
            rating: 4.6,
            featured: false,
            images: vec!["/elegant-dining-set.png".to_owned()],
            views: 67,
            watchers: 4,
        },
        Product {
            id: 6,
            title: "Electric Guitar Fender".to_owned(),
            price: 650,
            kind: ProductKind::Trade { trade_for: "Bass guitar or audio equipment".to_owned() },
            category: Category::Electronics,
            seller: "MusicLover".to_owned(),
            rating: 4.8,
            featured: false,
            images: vec!["/electric-guitar.jpg".to_owned()],
            views: 145,
            watchers: 9,
        },
    ]
}
