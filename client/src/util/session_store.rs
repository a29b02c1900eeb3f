//! Browser `localStorage` persistence for the identity session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity client saves the session here after sign-in and token refresh
//! and clears it on sign-out, so a reload restores the signed-in state. All
//! reads and writes are hydrate-only; on the server they are no-ops.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::session::Session;

/// Storage key for the persisted session.
pub const SESSION_KEY: &str = "primecfo.auth.session";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(key).ok().flatten()?;
        decode(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

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

/// Parse a stored value; corrupt entries read as absent.
#[cfg(any(test, feature = "hydrate"))]
fn decode<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw).ok()
}

/// Stored session, if one exists and has a usable token.
pub fn load_session() -> Option<Session> {
    load_json::<Session>(SESSION_KEY).filter(|s| !s.access_token.is_empty())
}

pub fn save_session(session: &Session) {
    save_json(SESSION_KEY, session);
}

pub fn clear_session() {
    remove(SESSION_KEY);
}
