//! Browser `localStorage` helpers for session and preference persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Language, theme and the mock session are loaded once at startup and written
//! back only through their setters. These helpers centralize the hydrate-only
//! web-sys glue; outside the browser every read is `None` and every write is a
//! no-op, which keeps SSR and native tests deterministic.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the raw string stored under `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store a raw string under `key`.
pub fn save_raw(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove whatever is stored under `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Load a JSON value stored under `key`. Malformed JSON reads as `None`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_raw(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    save_raw(key, &raw);
}
