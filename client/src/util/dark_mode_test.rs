#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_light_outside_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn theme_name_matches_attribute_values() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}
