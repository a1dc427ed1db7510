//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages that need a signed-in seller apply identical unauthenticated
//! redirect behavior.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, should_redirect_unauth};

/// Redirect to `/login` whenever the session has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
