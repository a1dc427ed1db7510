//! Listing draft and the five-step creation wizard.
//!
//! DESIGN
//! ======
//! The wizard is a linear chain: Basics -> Photos -> Pricing -> Shipping ->
//! Review. Moving forward is gated by the current step's predicate; moving
//! back never is. Validation is a set of total boolean checks over the draft:
//! a failing check leaves the forward control disabled and nothing else
//! happens, so there is no error type here.
//!
//! Submission re-checks every editable step (1 through 4), not only shipping,
//! which lets a valid draft convert into the tagged `Listing` without any
//! fallible step. A submitted wizard is terminal and ignores further input.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::i18n::Translator;
use crate::state::staging::{ImageStaging, StagedImage};
use crate::state::taxonomy::{AuctionDuration, Category, Condition, ListingType, ShippingOption};

/// Soft length hints shown under the text inputs. Not enforced.
pub const TITLE_HINT_CHARS: usize = 80;
pub const DESCRIPTION_HINT_CHARS: usize = 1000;

/// Wizard steps, in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    #[default]
    Basics,
    Photos,
    Pricing,
    Shipping,
    Review,
}

impl WizardStep {
    pub const ALL: [Self; 5] = [Self::Basics, Self::Photos, Self::Pricing, Self::Shipping, Self::Review];

    /// 1-based position shown in the progress header.
    pub fn number(self) -> u8 {
        match self {
            Self::Basics => 1,
            Self::Photos => 2,
            Self::Pricing => 3,
            Self::Shipping => 4,
            Self::Review => 5,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() == number)
    }

    /// Following step; `Review` stays put.
    pub fn next(self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(Self::Review)
    }

    /// Preceding step; `Basics` stays put.
    pub fn prev(self) -> Self {
        Self::from_number(self.number().saturating_sub(1)).unwrap_or(Self::Basics)
    }

    pub fn title_key(self) -> &'static str {
        match self {
            Self::Basics => "step.basics",
            Self::Photos => "step.photos",
            Self::Pricing => "step.pricing",
            Self::Shipping => "step.shipping",
            Self::Review => "step.review",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Self::Basics => "Title, description, category",
            Self::Photos => "Upload product images",
            Self::Pricing => "Set price or auction details",
            Self::Shipping => "Location and shipping options",
            Self::Review => "Review and publish",
        }
    }
}

/// In-progress listing owned by the wizard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub condition: Option<Condition>,
    pub listing_type: ListingType,
    /// Decimal string. Buy-now price, or estimated value for trades.
    pub price: String,
    /// Decimal string.
    pub starting_bid: String,
    pub auction_duration: Option<AuctionDuration>,
    pub trade_for: String,
    pub location: String,
    pub shipping: BTreeSet<ShippingOption>,
    pub returns: bool,
    pub images: ImageStaging,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: None,
            condition: None,
            listing_type: ListingType::Fixed,
            price: String::new(),
            starting_bid: String::new(),
            auction_duration: Some(AuctionDuration::default()),
            trade_for: String::new(),
            location: String::new(),
            shipping: BTreeSet::from([ShippingOption::Standard]),
            returns: true,
            images: ImageStaging::default(),
        }
    }
}

/// Any character counts, whitespace included; trimming happens on conversion.
fn filled(value: &str) -> bool {
    !value.is_empty()
}

impl ListingDraft {
    pub fn basics_complete(&self) -> bool {
        filled(&self.title) && filled(&self.description) && self.category.is_some() && self.condition.is_some()
    }

    pub fn photos_complete(&self) -> bool {
        !self.images.is_empty()
    }

    /// Only the fields of the selected listing type are consulted.
    pub fn pricing_complete(&self) -> bool {
        match self.listing_type {
            ListingType::Fixed => filled(&self.price),
            ListingType::Auction => filled(&self.starting_bid) && self.auction_duration.is_some(),
            ListingType::Trade => filled(&self.trade_for) && filled(&self.price),
        }
    }

    pub fn shipping_complete(&self) -> bool {
        filled(&self.location) && !self.shipping.is_empty()
    }

    /// Gate for leaving `step`. Review always passes.
    pub fn is_step_valid(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Basics => self.basics_complete(),
            WizardStep::Photos => self.photos_complete(),
            WizardStep::Pricing => self.pricing_complete(),
            WizardStep::Shipping => self.shipping_complete(),
            WizardStep::Review => true,
        }
    }

    pub fn is_complete(&self) -> bool {
        WizardStep::ALL.into_iter().all(|step| self.is_step_valid(step))
    }

    /// Add or remove a shipping option.
    pub fn toggle_shipping(&mut self, option: ShippingOption) {
        if !self.shipping.remove(&option) {
            self.shipping.insert(option);
        }
    }

    /// Convert into the tagged form. `None` unless every step is valid.
    pub fn to_listing(&self) -> Option<Listing> {
        if !self.is_complete() {
            return None;
        }
        let terms = match self.listing_type {
            ListingType::Fixed => ListingTerms::Fixed { price: self.price.trim().to_owned() },
            ListingType::Auction => ListingTerms::Auction {
                starting_bid: self.starting_bid.trim().to_owned(),
                duration: self.auction_duration?,
            },
            ListingType::Trade => ListingTerms::Trade {
                trade_for: self.trade_for.trim().to_owned(),
                estimated_value: self.price.trim().to_owned(),
            },
        };
        Some(Listing {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            category: self.category?,
            condition: self.condition?,
            terms,
            location: self.location.trim().to_owned(),
            shipping: self.shipping.iter().copied().collect(),
            returns: self.returns,
            images: self.images.images().to_vec(),
        })
    }
}

/// Price terms of a submitted listing, one variant per listing type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ListingTerms {
    Fixed { price: String },
    Auction { starting_bid: String, duration: AuctionDuration },
    Trade { trade_for: String, estimated_value: String },
}

impl ListingTerms {
    pub fn listing_type(&self) -> ListingType {
        match self {
            Self::Fixed { .. } => ListingType::Fixed,
            Self::Auction { .. } => ListingType::Auction,
            Self::Trade { .. } => ListingType::Trade,
        }
    }

    /// One-line price summary for review and dashboard rows.
    pub fn summary(&self, t: &Translator) -> String {
        match self {
            Self::Fixed { price } => format!("${price}"),
            Self::Auction { starting_bid, duration } => t.t_args(
                "terms.auction",
                &[("bid", starting_bid.clone()), ("days", duration.days().to_string())],
            ),
            Self::Trade { trade_for, estimated_value } => t.t_args(
                "terms.trade",
                &[("item", trade_for.clone()), ("value", estimated_value.clone())],
            ),
        }
    }
}

/// A completed listing handed to the submission sink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub condition: Condition,
    pub terms: ListingTerms,
    pub location: String,
    pub shipping: Vec<ShippingOption>,
    pub returns: bool,
    pub images: Vec<StagedImage>,
}

/// Receives finished listings. Fire-and-forget from the wizard's side.
pub trait ListingSink {
    fn accept(&self, listing: Listing);
}

/// Wizard position plus the draft it edits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingWizard {
    step: WizardStep,
    draft: ListingDraft,
    submitted: bool,
}

impl ListingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Apply an edit to the draft. Ignored once submitted.
    pub fn edit(&mut self, f: impl FnOnce(&mut ListingDraft)) {
        if !self.submitted {
            f(&mut self.draft);
        }
    }

    pub fn validate_step(&self, step: WizardStep) -> bool {
        self.draft.is_step_valid(step)
    }

    /// Whether the forward control is enabled.
    pub fn can_advance(&self) -> bool {
        !self.submitted && self.step != WizardStep::Review && self.validate_step(self.step)
    }

    /// Move to the next step if the current one validates.
    pub fn advance(&mut self) {
        if !self.submitted && self.validate_step(self.step) {
            self.step = self.step.next();
        }
    }

    /// Move to the previous step unconditionally.
    pub fn retreat(&mut self) {
        if !self.submitted {
            self.step = self.step.prev();
        }
    }

    /// Whether the publish control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.submitted && self.draft.is_complete()
    }

    /// Hand the finished listing to `sink` and end the wizard.
    ///
    /// Returns `false` and leaves everything untouched when the draft does
    /// not pass the final gate.
    pub fn submit<S: ListingSink + ?Sized>(&mut self, sink: &S) -> bool {
        if !self.can_submit() {
            return false;
        }
        let Some(listing) = self.draft.to_listing() else {
            return false;
        };
        self.submitted = true;
        sink.accept(listing);
        true
    }
}
