use std::cell::RefCell;

use super::*;

#[derive(Default)]
struct RecordingSink {
    accepted: RefCell<Vec<Listing>>,
}

impl ListingSink for RecordingSink {
    fn accept(&self, listing: Listing) {
        self.accepted.borrow_mut().push(listing);
    }
}

fn photo(name: &str) -> StagedImage {
    StagedImage::new(name, 2048, None)
}

fn complete_draft() -> ListingDraft {
    let mut draft = ListingDraft {
        title: "Road bike".to_owned(),
        description: "Aluminium frame, 56cm".to_owned(),
        category: Some(Category::Sports),
        condition: Some(Condition::Good),
        price: "350".to_owned(),
        location: "Lyon".to_owned(),
        ..ListingDraft::default()
    };
    draft.images.add_images([photo("front.jpg")]);
    draft
}

fn wizard_with(draft: ListingDraft) -> ListingWizard {
    let mut wizard = ListingWizard::new();
    wizard.edit(|d| *d = draft);
    wizard
}

fn advance_to(wizard: &mut ListingWizard, step: WizardStep) {
    while wizard.step() < step {
        let before = wizard.step();
        wizard.advance();
        assert_ne!(wizard.step(), before, "blocked at {before:?}");
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_wizard_starts_at_basics_with_defaults() {
    let wizard = ListingWizard::new();
    assert_eq!(wizard.step(), WizardStep::Basics);
    let draft = wizard.draft();
    assert_eq!(draft.listing_type, ListingType::Fixed);
    assert_eq!(draft.auction_duration, Some(AuctionDuration::SevenDays));
    assert_eq!(draft.shipping, BTreeSet::from([ShippingOption::Standard]));
    assert!(draft.returns);
    assert!(draft.images.is_empty());
    assert!(!wizard.is_submitted());
}

// =============================================================
// Step 1: basics
// =============================================================

#[test]
fn advance_from_basics_blocked_when_any_field_missing() {
    let cases: [fn(&mut ListingDraft); 4] = [
        |d| d.title.clear(),
        |d| d.description.clear(),
        |d| d.category = None,
        |d| d.condition = None,
    ];
    for clear in cases {
        let mut draft = complete_draft();
        clear(&mut draft);
        let mut wizard = wizard_with(draft);
        assert!(!wizard.can_advance());
        wizard.advance();
        assert_eq!(wizard.step(), WizardStep::Basics);
    }
}

#[test]
fn whitespace_only_fields_still_count_as_filled() {
    let mut draft = complete_draft();
    draft.title = "   ".to_owned();
    assert!(draft.basics_complete());

    draft.listing_type = ListingType::Auction;
    draft.starting_bid = " ".to_owned();
    assert!(draft.pricing_complete());

    draft.location = "\t".to_owned();
    assert!(draft.shipping_complete());
}

#[test]
fn empty_string_is_the_only_unfilled_text() {
    let mut draft = complete_draft();
    draft.title.clear();
    assert!(!draft.basics_complete());
    draft.title = " ".to_owned();
    assert!(draft.basics_complete());
}

#[test]
fn advance_from_basics_when_complete() {
    let mut wizard = wizard_with(complete_draft());
    wizard.advance();
    assert_eq!(wizard.step(), WizardStep::Photos);
}

// =============================================================
// Step 2: photos
// =============================================================

#[test]
fn photos_step_requires_an_image() {
    let mut draft = complete_draft();
    draft.images.clear();
    let mut wizard = wizard_with(draft);
    wizard.advance();
    assert_eq!(wizard.step(), WizardStep::Photos);
    wizard.advance();
    assert_eq!(wizard.step(), WizardStep::Photos);

    wizard.edit(|d| {
        d.images.add_images([photo("a.jpg")]);
    });
    wizard.advance();
    assert_eq!(wizard.step(), WizardStep::Pricing);
}

// =============================================================
// Step 3: pricing
// =============================================================

#[test]
fn fixed_requires_price() {
    let mut draft = complete_draft();
    draft.price.clear();
    assert!(!draft.pricing_complete());
    draft.price = "10".to_owned();
    assert!(draft.pricing_complete());
}

#[test]
fn auction_requires_starting_bid_and_duration_only() {
    let mut draft = complete_draft();
    draft.listing_type = ListingType::Auction;
    draft.price.clear();
    draft.trade_for.clear();
    draft.starting_bid = "100".to_owned();
    assert!(draft.pricing_complete());

    draft.auction_duration = None;
    assert!(!draft.pricing_complete());

    draft.auction_duration = Some(AuctionDuration::ThreeDays);
    draft.starting_bid.clear();
    draft.price = "999".to_owned();
    draft.trade_for = "anything".to_owned();
    assert!(!draft.pricing_complete());
}

#[test]
fn trade_requires_trade_for_and_price() {
    let mut draft = complete_draft();
    draft.listing_type = ListingType::Trade;
    assert!(!draft.pricing_complete());
    draft.trade_for = "Vinyl records".to_owned();
    assert!(draft.pricing_complete());
    draft.price.clear();
    assert!(!draft.pricing_complete());
}

// =============================================================
// Step 4: shipping
// =============================================================

#[test]
fn shipping_requires_location_and_an_option() {
    let mut draft = complete_draft();
    assert!(draft.shipping_complete());
    draft.toggle_shipping(ShippingOption::Standard);
    assert!(draft.shipping.is_empty());
    assert!(!draft.shipping_complete());
    draft.toggle_shipping(ShippingOption::Pickup);
    assert!(draft.shipping_complete());
    draft.location.clear();
    assert!(!draft.shipping_complete());
}

#[test]
fn review_step_always_validates() {
    let wizard = ListingWizard::new();
    assert!(wizard.validate_step(WizardStep::Review));
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn advance_stops_at_review() {
    let mut wizard = wizard_with(complete_draft());
    advance_to(&mut wizard, WizardStep::Review);
    assert!(!wizard.can_advance());
    wizard.advance();
    assert_eq!(wizard.step(), WizardStep::Review);
}

#[test]
fn retreat_is_unconditional_and_stops_at_basics() {
    let mut wizard = wizard_with(complete_draft());
    advance_to(&mut wizard, WizardStep::Pricing);
    wizard.edit(|d| d.title.clear());
    wizard.retreat();
    assert_eq!(wizard.step(), WizardStep::Photos);
    wizard.retreat();
    wizard.retreat();
    assert_eq!(wizard.step(), WizardStep::Basics);
}

#[test]
fn step_numbers_and_neighbours() {
    assert_eq!(WizardStep::Basics.number(), 1);
    assert_eq!(WizardStep::Review.number(), 5);
    assert_eq!(WizardStep::Basics.prev(), WizardStep::Basics);
    assert_eq!(WizardStep::Review.next(), WizardStep::Review);
    assert_eq!(WizardStep::Pricing.next(), WizardStep::Shipping);
    assert_eq!(WizardStep::from_number(0), None);
    assert_eq!(WizardStep::from_number(6), None);
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_hands_tagged_listing_to_sink() {
    let sink = RecordingSink::default();
    let mut wizard = wizard_with(complete_draft());
    advance_to(&mut wizard, WizardStep::Review);

    assert!(wizard.submit(&sink));
    assert!(wizard.is_submitted());

    let accepted = sink.accepted.borrow();
    assert_eq!(accepted.len(), 1);
    let listing = &accepted[0];
    assert_eq!(listing.title, "Road bike");
    assert_eq!(listing.terms, ListingTerms::Fixed { price: "350".to_owned() });
    assert_eq!(listing.shipping, vec![ShippingOption::Standard]);
    assert_eq!(listing.images.len(), 1);
}

#[test]
fn submit_blocked_when_shipping_invalid_even_on_review() {
    let sink = RecordingSink::default();
    let mut wizard = wizard_with(complete_draft());
    advance_to(&mut wizard, WizardStep::Review);
    wizard.edit(|d| d.location.clear());

    assert!(!wizard.can_submit());
    assert!(!wizard.submit(&sink));
    assert!(sink.accepted.borrow().is_empty());
    assert_eq!(wizard.step(), WizardStep::Review);
    assert!(!wizard.is_submitted());
}

#[test]
fn submit_rechecks_earlier_steps() {
    let sink = RecordingSink::default();
    let mut wizard = wizard_with(complete_draft());
    advance_to(&mut wizard, WizardStep::Review);
    wizard.edit(|d| {
        d.images.clear();
    });

    assert!(wizard.validate_step(WizardStep::Shipping));
    assert!(!wizard.submit(&sink));
    assert!(sink.accepted.borrow().is_empty());
}

#[test]
fn submitted_wizard_ignores_further_input() {
    let sink = RecordingSink::default();
    let mut wizard = wizard_with(complete_draft());
    advance_to(&mut wizard, WizardStep::Review);
    assert!(wizard.submit(&sink));

    wizard.retreat();
    wizard.edit(|d| d.title = "changed".to_owned());
    assert_eq!(wizard.step(), WizardStep::Review);
    assert_eq!(wizard.draft().title, "Road bike");
    assert!(!wizard.submit(&sink));
    assert_eq!(sink.accepted.borrow().len(), 1);
}

#[test]
fn auction_draft_converts_to_auction_terms() {
    let mut draft = complete_draft();
    draft.listing_type = ListingType::Auction;
    draft.starting_bid = " 120 ".to_owned();
    draft.auction_duration = Some(AuctionDuration::TenDays);
    let listing = draft.to_listing().unwrap();
    assert_eq!(
        listing.terms,
        ListingTerms::Auction { starting_bid: "120".to_owned(), duration: AuctionDuration::TenDays }
    );
    assert_eq!(listing.terms.summary(&Translator::default()), "Starting at $120 for 10 days");
}

#[test]
fn trade_draft_uses_price_as_estimated_value() {
    let mut draft = complete_draft();
    draft.listing_type = ListingType::Trade;
    draft.trade_for = "Camera lens".to_owned();
    let listing = draft.to_listing().unwrap();
    assert_eq!(
        listing.terms,
        ListingTerms::Trade { trade_for: "Camera lens".to_owned(), estimated_value: "350".to_owned() }
    );
    assert_eq!(listing.terms.listing_type(), ListingType::Trade);
}

#[test]
fn incomplete_draft_does_not_convert() {
    assert!(ListingDraft::default().to_listing().is_none());
}

#[test]
fn terms_summary_follows_language() {
    let trade = ListingTerms::Trade { trade_for: "Bass".to_owned(), estimated_value: "300".to_owned() };
    assert_eq!(trade.summary(&Translator::default()), "Trade for Bass (est. $300)");
    let fr = Translator::new(crate::i18n::Language::Fr);
    assert_eq!(trade.summary(&fr), "Échange contre Bass (val. est. 300 $)");
    assert_eq!(ListingTerms::Fixed { price: "15".to_owned() }.summary(&fr), "$15");
}
