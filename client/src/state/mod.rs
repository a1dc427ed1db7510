//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `catalog`, `listing`, etc.) so individual
//! components can depend on small focused models. None of these modules touch
//! Leptos signals; pages wrap them.

pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod listing;
pub mod staging;
pub mod taxonomy;
pub mod ui;
