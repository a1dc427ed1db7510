//! Seller dashboard state: listings published during this session, plus the
//! demo purchase history and inbox.
//!
//! DESIGN
//! ======
//! Published listings get a dashboard id when recorded so row actions (mark
//! sold, remove) keep working after earlier rows are removed. Purchases and
//! messages are seeded relative to a caller-supplied clock; only a message's
//! unread flag ever changes.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::state::catalog::title_matches;
use crate::state::listing::Listing;
use crate::state::taxonomy::ListingType;
use crate::util::countdown::{MS_PER_DAY, MS_PER_HOUR};

/// Sale state of one of the seller's listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListingStatus {
    #[default]
    Active,
    Sold,
}

impl ListingStatus {
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Active => "dashboard.status.active",
            Self::Sold => "dashboard.status.sold",
        }
    }
}

/// A published listing as the dashboard tracks it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardListing {
    pub id: u32,
    pub listing: Listing,
    pub status: ListingStatus,
}

/// Delivery progress of a purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PurchaseStatus {
    Shipped,
    Delivered,
}

impl PurchaseStatus {
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Shipped => "dashboard.status.shipped",
            Self::Delivered => "dashboard.status.delivered",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Purchase {
    pub id: u32,
    pub title: String,
    /// Whole dollars.
    pub price: u32,
    pub seller: String,
    pub status: PurchaseStatus,
    /// Milliseconds since the Unix epoch.
    pub ordered_at: i64,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: u32,
    pub from: String,
    pub subject: String,
    pub preview: String,
    /// Milliseconds since the Unix epoch.
    pub sent_at: i64,
    pub unread: bool,
}

/// Dashboard sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Listings,
    Purchases,
    Messages,
}

impl DashboardTab {
    pub const ALL: [Self; 3] = [Self::Listings, Self::Purchases, Self::Messages];

    pub fn label_key(self) -> &'static str {
        match self {
            Self::Listings => "dashboard.tab.listings",
            Self::Purchases => "dashboard.tab.purchases",
            Self::Messages => "dashboard.tab.messages",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    /// Newest last.
    pub listings: Vec<DashboardListing>,
    pub purchases: Vec<Purchase>,
    pub messages: Vec<Message>,
    next_listing_id: u32,
}

/// Summary counters shown above the tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub active: usize,
    pub sold: usize,
    pub fixed: usize,
    pub auctions: usize,
    pub trades: usize,
    /// Listings with more than the main photo.
    pub multi_photo: usize,
    pub photos: usize,
    pub purchases: usize,
    pub unread: usize,
}

impl DashboardState {
    /// Empty listings with the demo purchases and inbox, dated relative to
    /// `now_ms`.
    pub fn seeded(now_ms: i64) -> Self {
        Self { purchases: demo_purchases(now_ms), messages: demo_messages(now_ms), ..Self::default() }
    }

    /// Track a newly published listing and return its dashboard id.
    pub fn record(&mut self, listing: Listing) -> u32 {
        self.next_listing_id += 1;
        let id = self.next_listing_id;
        self.listings.push(DashboardListing { id, listing, status: ListingStatus::Active });
        id
    }

    /// Returns false when `id` is unknown or already sold.
    pub fn mark_sold(&mut self, id: u32) -> bool {
        match self.listings.iter_mut().find(|l| l.id == id) {
            Some(entry) if entry.status == ListingStatus::Active => {
                entry.status = ListingStatus::Sold;
                true
            }
            _ => false,
        }
    }

    /// Drop a listing and hand it back so its photo previews can be released.
    pub fn remove(&mut self, id: u32) -> Option<Listing> {
        let index = self.listings.iter().position(|l| l.id == id)?;
        Some(self.listings.remove(index).listing)
    }

    /// Listings whose title contains `query`, case-insensitively, in
    /// submission order.
    pub fn search(&self, query: &str) -> Vec<&DashboardListing> {
        self.listings.iter().filter(|l| title_matches(&l.listing.title, query)).collect()
    }

    /// Returns false when `id` is unknown or already read.
    pub fn mark_read(&mut self, id: u32) -> bool {
        match self.messages.iter_mut().find(|m| m.id == id) {
            Some(message) if message.unread => {
                message.unread = false;
                true
            }
            _ => false,
        }
    }

    pub fn stats(&self) -> DashboardStats {
        let mut stats = self.listings.iter().fold(DashboardStats::default(), |mut stats, entry| {
            let listing = &entry.listing;
            stats.total += 1;
            match entry.status {
                ListingStatus::Active => stats.active += 1,
                ListingStatus::Sold => stats.sold += 1,
            }
            match listing.terms.listing_type() {
                ListingType::Fixed => stats.fixed += 1,
                ListingType::Auction => stats.auctions += 1,
                ListingType::Trade => stats.trades += 1,
            }
            if listing.images.len() > 1 {
                stats.multi_photo += 1;
            }
            stats.photos += listing.images.len();
            stats
        });
        stats.purchases = self.purchases.len();
        stats.unread = self.messages.iter().filter(|m| m.unread).count();
        stats
    }
}

fn demo_purchases(now_ms: i64) -> Vec<Purchase> {
    vec![
        Purchase {
            id: 1,
            title: "Rare Pokemon Card Collection".to_owned(),
            price: 950,
            seller: "CardMaster".to_owned(),
            status: PurchaseStatus::Shipped,
            ordered_at: now_ms - 5 * MS_PER_DAY,
            image: "/pokemon-cards.jpg".to_owned(),
        },
        Purchase {
            id: 2,
            title: "Electric Guitar Fender".to_owned(),
            price: 650,
            seller: "MusicLover".to_owned(),
            status: PurchaseStatus::Delivered,
            ordered_at: now_ms - 10 * MS_PER_DAY,
            image: "/electric-guitar.jpg".to_owned(),
        },
    ]
}

fn demo_messages(now_ms: i64) -> Vec<Message> {
    vec![
        Message {
            id: 1,
            from: "BidderPro".to_owned(),
            subject: "Question about Rolex condition".to_owned(),
            preview: "Hi, I'm interested in your Rolex listing. Could you tell me more about...".to_owned(),
            sent_at: now_ms - 2 * MS_PER_HOUR,
            unread: true,
        },
        Message {
            id: 2,
            from: "TradeSeeker".to_owned(),
            subject: "Trade proposal for leather jacket".to_owned(),
            preview: "I have a vintage denim jacket that might interest you...".to_owned(),
            sent_at: now_ms - 6 * MS_PER_HOUR,
            unread: false,
        },
    ]
}
