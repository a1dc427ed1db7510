use super::*;

// =============================================================
// Language
// =============================================================

#[test]
fn language_default_is_english() {
    assert_eq!(Language::default(), Language::En);
}

#[test]
fn language_from_code_round_trips_known_codes() {
    for lang in Language::ALL {
        assert_eq!(Language::from_code(lang.code()), Some(lang));
    }
}

#[test]
fn language_from_code_rejects_unknown() {
    assert_eq!(Language::from_code("de"), None);
    assert_eq!(Language::from_code(""), None);
    assert_eq!(Language::from_code("EN"), None);
}

#[test]
fn language_serializes_as_lowercase_code() {
    let raw = serde_json::to_string(&Language::Fr).unwrap();
    assert_eq!(raw, "\"fr\"");
}

// =============================================================
// Translator
// =============================================================

#[test]
fn translate_uses_active_language() {
    assert_eq!(Translator::new(Language::En).t("nav.sell"), "Sell");
    assert_eq!(Translator::new(Language::Fr).t("nav.sell"), "Vendre");
    assert_eq!(Translator::new(Language::It).t("nav.sell"), "Vendere");
    assert_eq!(Translator::new(Language::Es).t("nav.sell"), "Vender");
}

#[test]
fn translate_falls_back_to_english_for_empty_cell() {
    assert_eq!(Translator::new(Language::It).t("nav.dashboard"), "Dashboard");
    assert_eq!(Translator::new(Language::Fr).t("category.toys"), "Toys & Games");
}

#[test]
fn translate_returns_key_when_missing() {
    let t = Translator::new(Language::Es);
    assert_eq!(t.t("no.such.key"), "no.such.key");
}

#[test]
fn table_keys_are_unique() {
    for (i, (a, _)) in TABLE.iter().enumerate() {
        for (b, _) in &TABLE[i + 1..] {
            assert_ne!(a, b, "duplicate key {a}");
        }
    }
}

#[test]
fn table_has_english_for_every_key() {
    for (key, row) in TABLE {
        assert!(!row[0].is_empty(), "missing English for {key}");
    }
}

#[test]
fn load_language_defaults_outside_browser() {
    assert_eq!(load_language(), Language::En);
}

#[test]
fn page_labels_are_translated_in_every_language() {
    let keys = [
        "sell.basicInfo",
        "sell.title",
        "sell.shippingLocation",
        "sell.review",
        "photos.drop",
        "field.location",
        "dashboard.stat.active",
        "dashboard.tab.listings",
        "dashboard.search",
        "dashboard.empty",
        "detail.bids",
        "detail.watch",
    ];
    for lang in Language::ALL {
        let t = Translator::new(lang);
        for key in keys {
            assert_ne!(t.t(key), key, "{key} missing for {}", lang.code());
        }
    }
    assert_eq!(Translator::new(Language::Fr).t("dashboard.tab.listings"), "Mes annonces");
    assert_eq!(Translator::new(Language::En).t("sell.basicInfo"), "Basic Information");
}

// =============================================================
// Placeholders
// =============================================================

#[test]
fn t_args_fills_every_named_placeholder() {
    let t = Translator::new(Language::En);
    assert_eq!(t.t_args("photos.count", &[("n", "3".to_owned()), ("max", "8".to_owned())]), "3 of 8 photos");
    assert_eq!(Translator::new(Language::It).t_args("sell.characters", &[("n", 12.to_string()), ("max", 80.to_string())]), "12/80 caratteri");
}

#[test]
fn t_args_leaves_unknown_placeholders_alone() {
    let t = Translator::new(Language::En);
    assert_eq!(t.t_args("photos.count", &[("n", "1".to_owned())]), "1 of {max} photos");
}

#[test]
fn ago_formats_age_in_active_language() {
    use crate::util::countdown::Age;

    assert_eq!(Translator::new(Language::En).ago(Age::Hours(2)), "2h ago");
    assert_eq!(Translator::new(Language::Fr).ago(Age::Days(5)), "il y a 5 j");
    assert_eq!(Translator::new(Language::Es).ago(Age::Minutes(30)), "hace 30 min");
}
