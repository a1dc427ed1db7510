//! Local UI chrome state (theme, browse layout, search inputs, watchlist).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`catalog`,
//! `listing`) so the browse controls can evolve independently of the data
//! they filter.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::collections::BTreeSet;

use crate::state::catalog::{CategoryFilter, ProductKind};

/// Product list layout on the browse page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// UI state for theme and browse controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub view_mode: ViewMode,
    pub search_query: String,
    pub category: CategoryFilter,
    /// Product ids the visitor is watching. Session only.
    pub watchlist: BTreeSet<u32>,
}

impl UiState {
    pub fn is_watching(&self, product_id: u32) -> bool {
        self.watchlist.contains(&product_id)
    }

    /// Flip the watch flag for `product_id` and return the new value.
    pub fn toggle_watch(&mut self, product_id: u32) -> bool {
        if self.watchlist.remove(&product_id) {
            false
        } else {
            self.watchlist.insert(product_id);
            true
        }
    }
}

/// Tabs under the product page header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Description,
    Details,
    Shipping,
    Bids,
}

impl DetailTab {
    /// Tabs offered for a product; the bid history only exists for auctions.
    pub fn for_kind(kind: &ProductKind) -> Vec<Self> {
        let mut tabs = vec![Self::Description, Self::Details, Self::Shipping];
        if matches!(kind, ProductKind::Auction { .. }) {
            tabs.push(Self::Bids);
        }
        tabs
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::Description => "detail.description",
            Self::Details => "detail.details",
            Self::Shipping => "detail.shipping",
            Self::Bids => "detail.bids",
        }
    }
}

/// Image carousel position on the product page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    pub index: usize,
    pub len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Step forward, wrapping to the first image.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Step back, wrapping to the last image.
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

/// Smallest bid increment shown next to an auction's current bid.
pub const BID_INCREMENT: u32 = 50;

/// Minimum acceptable next bid for display purposes.
pub fn min_next_bid(current_bid: u32) -> u32 {
    current_bid.saturating_add(BID_INCREMENT)
}
