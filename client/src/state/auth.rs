//! Mock session state.
//!
//! DESIGN
//! ======
//! There is no authentication backend: login and signup fabricate a user
//! locally and persist it to `localStorage`, so a reload keeps the session.
//! The server cannot see `localStorage`, so both renders start from the
//! default `loading` state and the app root restores the stored user in an
//! effect after hydration. Guarded pages wait until `loading` clears.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::util::ui_persistence;

/// `localStorage` key holding the serialized user.
pub const SESSION_STORAGE_KEY: &str = "marketplace_user";

/// The signed-in marketplace user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub rating: f32,
    pub join_year: u16,
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Restore the persisted session, if any.
    pub fn restore() -> Self {
        Self { user: ui_persistence::load_json(SESSION_STORAGE_KEY), loading: false }
    }

    /// Sign in with any email; the mock backend always answers with the
    /// same demo profile.
    pub fn login(&mut self, email: &str) {
        self.set_user(User {
            id: 1,
            name: "John Doe".to_owned(),
            email: email.trim().to_owned(),
            rating: 4.8,
            join_year: 2023,
        });
    }

    /// Create an account and sign in as it.
    pub fn signup(&mut self, name: &str, email: &str) {
        self.set_user(User {
            id: 1,
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            rating: 5.0,
            join_year: 2025,
        });
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            log::info!("session ended for {}", user.email);
        }
        ui_persistence::remove(SESSION_STORAGE_KEY);
    }

    fn set_user(&mut self, user: User) {
        log::info!("session started for {}", user.email);
        ui_persistence::save_json(SESSION_STORAGE_KEY, &user);
        self.user = Some(user);
        self.loading = false;
    }
}

/// Whether a page that needs a user should send the visitor to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}
