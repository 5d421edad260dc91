//! Browser `localStorage` helpers for the session token and JSON values.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth client and the start-up session restore both read the same token
//! key. [`TokenStore`] lets them share one abstraction so native tests and
//! server rendering can swap in [`MemoryTokenStore`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Persistent home for the session token.
pub trait TokenStore {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear_token(&self);
}

/// `localStorage`-backed token store (key [`TOKEN_KEY`]).
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn token(&self) -> Option<String> {
        load_raw(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    fn set_token(&self, token: &str) {
        save_raw(TOKEN_KEY, token);
    }

    fn clear_token(&self) {
        remove(TOKEN_KEY);
    }
}

/// In-memory token store for server rendering and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    inner: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { inner: Arc::new(Mutex::new(Some(token.to_owned()))) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.inner.lock().ok().and_then(|slot| slot.clone())
    }

    fn set_token(&self, token: &str) {
        if let Ok(mut slot) = self.inner.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn clear_token(&self) {
        if let Ok(mut slot) = self.inner.lock() {
            *slot = None;
        }
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_raw(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    save_raw(key, &raw);
}

/// Read a raw string from `localStorage`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a raw string to `localStorage`.
pub fn save_raw(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from `localStorage`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
