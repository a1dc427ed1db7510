//! # client
//!
//! Leptos + WASM frontend for the Bazaar marketplace.
//!
//! This crate contains the browse, product, sell, login and dashboard pages,
//! the components they share, and the plain-Rust state modules that hold the
//! marketplace rules (catalog filtering, the listing wizard, photo staging,
//! auction countdowns). The state modules have no browser dependency and are
//! unit-tested natively.

pub mod app;
pub mod components;
pub mod i18n;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating marketplace client");
    leptos::mount::hydrate_body(app::App);
}
