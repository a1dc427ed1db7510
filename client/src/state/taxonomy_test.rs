use super::*;

#[test]
fn category_values_round_trip() {
    for category in Category::ALL {
        assert_eq!(Category::from_value(category.value()), Some(category));
    }
    assert_eq!(Category::from_value("all"), None);
}

#[test]
fn category_label_keys_resolve_in_english() {
    let t = crate::i18n::Translator::default();
    for category in Category::ALL {
        assert_ne!(t.t(category.label_key()), category.label_key());
    }
}

#[test]
fn condition_type_and_shipping_label_keys_resolve() {
    let t = crate::i18n::Translator::default();
    let keys = Condition::ALL
        .into_iter()
        .map(Condition::label_key)
        .chain(ListingType::ALL.into_iter().map(ListingType::label_key))
        .chain(ShippingOption::ALL.into_iter().map(ShippingOption::label_key));
    for key in keys {
        assert_ne!(t.t(key), key);
    }
    assert_eq!(t.t(Condition::LikeNew.label_key()), "Like New");
    assert_eq!(t.t(ListingType::Fixed.label_key()), "Fixed Price");
    assert_eq!(t.t(ShippingOption::Pickup.label_key()), "Local Pickup Only");
}

#[test]
fn condition_uses_kebab_case_value() {
    assert_eq!(Condition::LikeNew.value(), "like-new");
    assert_eq!(Condition::from_value("like-new"), Some(Condition::LikeNew));
    assert_eq!(serde_json::to_string(&Condition::LikeNew).unwrap(), "\"like-new\"");
}

#[test]
fn listing_type_defaults_to_fixed() {
    assert_eq!(ListingType::default(), ListingType::Fixed);
    assert_eq!(ListingType::from_value("trade"), Some(ListingType::Trade));
    assert_eq!(ListingType::from_value("swap"), None);
}

#[test]
fn auction_duration_accepts_only_offered_lengths() {
    assert_eq!(AuctionDuration::default().days(), 7);
    assert_eq!(AuctionDuration::from_days(10), Some(AuctionDuration::TenDays));
    assert_eq!(AuctionDuration::from_days(2), None);
    assert_eq!(AuctionDuration::from_days(0), None);
}

#[test]
fn shipping_fees_match_options() {
    assert_eq!(ShippingOption::Standard.fee(), "Free");
    assert_eq!(ShippingOption::Pickup.fee(), "Free");
    assert_eq!(ShippingOption::Express.fee(), "$9.99");
    assert_eq!(ShippingOption::Overnight.fee(), "$24.99");
}
