//! Light/dark theme preference.
//!
//! Reads the stored theme from `localStorage` and applies a `data-theme`
//! attribute to the `<html>` element. Toggling writes the new theme back.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::ui_persistence;

const STORAGE_KEY: &str = "marketplace-theme";

/// Read the theme preference.
///
/// A stored `"dark"`/`"light"` wins; otherwise the system color-scheme
/// preference decides.
pub fn read_preference() -> bool {
    if let Some(stored) = ui_persistence::load_raw(STORAGE_KEY) {
        return stored == "dark";
    }
    system_prefers_dark()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme_name(enabled));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle the theme and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    ui_persistence::save_raw(STORAGE_KEY, theme_name(next));
    next
}

fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}
