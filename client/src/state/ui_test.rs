use super::*;
use crate::state::taxonomy::Category;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_browse_controls() {
    let state = UiState::default();
    assert_eq!(state.view_mode, ViewMode::Grid);
    assert!(state.search_query.is_empty());
    assert_eq!(state.category, CategoryFilter::All);
}

#[test]
fn view_mode_variants_are_distinct() {
    assert_ne!(ViewMode::Grid, ViewMode::List);
}

#[test]
fn category_filter_is_part_of_equality() {
    let a = UiState::default();
    let b = UiState { category: CategoryFilter::Only(Category::Home), ..UiState::default() };
    assert_ne!(a, b);
}

// =============================================================
// Carousel
// =============================================================

#[test]
fn carousel_next_wraps_to_first() {
    let mut carousel = Carousel::new(3);
    carousel.next();
    carousel.next();
    assert_eq!(carousel.index, 2);
    carousel.next();
    assert_eq!(carousel.index, 0);
}

#[test]
fn carousel_prev_wraps_to_last() {
    let mut carousel = Carousel::new(3);
    carousel.prev();
    assert_eq!(carousel.index, 2);
}

#[test]
fn single_image_carousel_stays_put() {
    let mut carousel = Carousel::new(1);
    carousel.next();
    carousel.prev();
    assert_eq!(carousel.index, 0);
}

#[test]
fn empty_carousel_never_moves() {
    let mut carousel = Carousel::new(0);
    carousel.next();
    carousel.prev();
    carousel.select(0);
    assert_eq!(carousel.index, 0);
}

#[test]
fn carousel_select_ignores_out_of_range() {
    let mut carousel = Carousel::new(2);
    carousel.select(1);
    assert_eq!(carousel.index, 1);
    carousel.select(5);
    assert_eq!(carousel.index, 1);
}

// =============================================================
// Bids
// =============================================================

#[test]
fn min_next_bid_adds_increment() {
    assert_eq!(min_next_bid(7200), 7250);
    assert_eq!(min_next_bid(u32::MAX), u32::MAX);
}

// =============================================================
// Watchlist
// =============================================================

#[test]
fn toggle_watch_flips_and_reports_new_state() {
    let mut state = UiState::default();
    assert!(!state.is_watching(4));
    assert!(state.toggle_watch(4));
    assert!(state.is_watching(4));
    assert!(!state.toggle_watch(4));
    assert!(!state.is_watching(4));
}

#[test]
fn watchlist_tracks_products_independently() {
    let mut state = UiState::default();
    state.toggle_watch(1);
    state.toggle_watch(6);
    state.toggle_watch(1);
    assert!(!state.is_watching(1));
    assert!(state.is_watching(6));
}

// =============================================================
// DetailTab
// =============================================================

#[test]
fn bids_tab_only_for_auctions() {
    let auction = ProductKind::Auction { current_bid: 100, end_time: 0 };
    assert_eq!(
        DetailTab::for_kind(&auction),
        vec![DetailTab::Description, DetailTab::Details, DetailTab::Shipping, DetailTab::Bids]
    );
    assert!(!DetailTab::for_kind(&ProductKind::Fixed).contains(&DetailTab::Bids));
    let trade = ProductKind::Trade { trade_for: "Bike".to_owned() };
    assert_eq!(DetailTab::for_kind(&trade).len(), 3);
}

#[test]
fn detail_tab_defaults_to_description() {
    assert_eq!(DetailTab::default(), DetailTab::Description);
}
