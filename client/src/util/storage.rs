//! Browser storage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only `localStorage`/`sessionStorage` access so the
//! identity adapter and the OAuth callback never repeat web-sys glue. On the
//! server every read is `None` and every write is a no-op.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::identity::{AuthSession, SessionStorage};

/// `localStorage` key holding the persisted auth session.
pub const SESSION_KEY: &str = "plantcare_auth_session";
/// `sessionStorage` key holding the pending OAuth `state` value.
pub const OAUTH_STATE_KEY: &str = "plantcare_oauth_state";

/// Which browser storage area to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Area {
    /// Survives browser restarts.
    Local,
    /// Cleared when the tab closes.
    Tab,
}

#[cfg(feature = "hydrate")]
fn storage(area: Area) -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match area {
        Area::Local => window.local_storage().ok().flatten(),
        Area::Tab => window.session_storage().ok().flatten(),
    }
}

/// Load a JSON value stored under `key`.
pub fn load_json<T: DeserializeOwned>(area: Area, key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage(area)?.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key);
        None
    }
}

/// Save a JSON value under `key`.
pub fn save_json<T: Serialize>(area: Area, key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage(area) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key, value);
    }
}

/// Remove `key`.
pub fn remove(area: Area, key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage(area) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key);
    }
}

/// Persists the auth session in `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStorage;

impl SessionStorage for LocalSessionStorage {
    fn load(&self) -> Option<AuthSession> {
        load_json(Area::Local, SESSION_KEY)
    }

    fn save(&self, session: &AuthSession) {
        save_json(Area::Local, SESSION_KEY, session);
    }

    fn clear(&self) {
        remove(Area::Local, SESSION_KEY);
    }
}
