use super::*;
use crate::state::listing::ListingTerms;
use crate::state::staging::StagedImage;
use crate::state::taxonomy::{AuctionDuration, Category, Condition, ShippingOption};

const NOW: i64 = 1_760_000_000_000;

fn fixed(title: &str) -> Listing {
    let mut listing = listing(ListingTerms::Fixed { price: "10".to_owned() }, 1);
    listing.title = title.to_owned();
    listing
}

fn listing(terms: ListingTerms, photos: usize) -> Listing {
    Listing {
        title: "Item".to_owned(),
        description: "Desc".to_owned(),
        category: Category::Books,
        condition: Condition::Fair,
        terms,
        location: "Rome".to_owned(),
        shipping: vec![ShippingOption::Pickup],
        returns: false,
        images: (0..photos).map(|i| StagedImage::new(format!("{i}.jpg"), 10, None)).collect(),
    }
}

#[test]
fn empty_dashboard_has_zero_stats() {
    assert_eq!(DashboardState::default().stats(), DashboardStats::default());
}

#[test]
fn stats_count_types_and_photos() {
    let mut state = DashboardState::default();
    state.record(listing(ListingTerms::Fixed { price: "5".to_owned() }, 1));
    state.record(listing(
        ListingTerms::Auction { starting_bid: "1".to_owned(), duration: AuctionDuration::OneDay },
        3,
    ));
    state.record(listing(
        ListingTerms::Trade { trade_for: "Books".to_owned(), estimated_value: "20".to_owned() },
        2,
    ));
    state.record(listing(ListingTerms::Fixed { price: "7".to_owned() }, 1));

    let stats = state.stats();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.fixed, 2);
    assert_eq!(stats.auctions, 1);
    assert_eq!(stats.trades, 1);
    assert_eq!(stats.multi_photo, 2);
    assert_eq!(stats.photos, 7);
}

#[test]
fn record_keeps_submission_order() {
    let mut state = DashboardState::default();
    let mut first = listing(ListingTerms::Fixed { price: "1".to_owned() }, 1);
    first.title = "first".to_owned();
    let mut second = listing(ListingTerms::Fixed { price: "2".to_owned() }, 1);
    second.title = "second".to_owned();
    state.record(first);
    state.record(second);
    let titles: Vec<&str> = state.listings.iter().map(|l| l.listing.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second"]);
}

// =============================================================
// Listing status and removal
// =============================================================

#[test]
fn recorded_listings_start_active_with_distinct_ids() {
    let mut state = DashboardState::default();
    let a = state.record(fixed("a"));
    let b = state.record(fixed("b"));
    assert_ne!(a, b);
    assert!(state.listings.iter().all(|l| l.status == ListingStatus::Active));
}

#[test]
fn mark_sold_moves_listing_between_counters() {
    let mut state = DashboardState::default();
    let id = state.record(fixed("bike"));
    state.record(fixed("lamp"));
    assert!(state.mark_sold(id));
    assert!(!state.mark_sold(id));
    assert!(!state.mark_sold(999));

    let stats = state.stats();
    assert_eq!((stats.total, stats.active, stats.sold), (2, 1, 1));
}

#[test]
fn remove_returns_listing_and_keeps_other_ids_valid() {
    let mut state = DashboardState::default();
    let first = state.record(fixed("first"));
    let second = state.record(fixed("second"));
    let removed = state.remove(first).unwrap();
    assert_eq!(removed.title, "first");
    assert!(state.remove(first).is_none());
    assert!(state.mark_sold(second));
    assert_eq!(state.stats().total, 1);
}

#[test]
fn ids_are_not_reused_after_removal() {
    let mut state = DashboardState::default();
    let first = state.record(fixed("first"));
    state.remove(first);
    assert_ne!(state.record(fixed("again")), first);
}

// =============================================================
// Search
// =============================================================

#[test]
fn search_matches_title_case_insensitively_in_order() {
    let mut state = DashboardState::default();
    state.record(fixed("Road Bike"));
    state.record(fixed("Desk lamp"));
    state.record(fixed("Mountain bike helmet"));
    let found: Vec<&str> = state.search("BIKE").iter().map(|l| l.listing.title.as_str()).collect();
    assert_eq!(found, vec!["Road Bike", "Mountain bike helmet"]);
    assert_eq!(state.search("").len(), 3);
    assert!(state.search("sofa").is_empty());
}

// =============================================================
// Purchases and messages
// =============================================================

#[test]
fn seeded_dashboard_has_demo_purchases_and_inbox() {
    let state = DashboardState::seeded(NOW);
    assert!(state.listings.is_empty());
    let purchases: Vec<(&str, PurchaseStatus)> = state.purchases.iter().map(|p| (p.title.as_str(), p.status)).collect();
    assert_eq!(
        purchases,
        vec![
            ("Rare Pokemon Card Collection", PurchaseStatus::Shipped),
            ("Electric Guitar Fender", PurchaseStatus::Delivered),
        ]
    );
    assert_eq!(state.purchases[0].ordered_at, NOW - 5 * MS_PER_DAY);
    assert_eq!(state.messages[0].sent_at, NOW - 2 * MS_PER_HOUR);

    let stats = state.stats();
    assert_eq!(stats.purchases, 2);
    assert_eq!(stats.unread, 1);
}

#[test]
fn mark_read_clears_unread_once() {
    let mut state = DashboardState::seeded(NOW);
    assert!(state.mark_read(1));
    assert!(!state.mark_read(1));
    assert!(!state.mark_read(2));
    assert!(!state.mark_read(42));
    assert_eq!(state.stats().unread, 0);
}

#[test]
fn dashboard_tabs_default_to_listings() {
    assert_eq!(DashboardTab::default(), DashboardTab::Listings);
    assert_eq!(DashboardTab::ALL.len(), 3);
}
