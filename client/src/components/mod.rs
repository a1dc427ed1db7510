//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render marketplace chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod countdown_timer;
pub mod image_dropzone;
pub mod product_card;
pub mod toolbar;
pub mod wizard_progress;
