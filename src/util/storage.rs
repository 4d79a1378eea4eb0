//! Browser `localStorage` helpers for the persisted session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session marker and role live under two string keys. These helpers
//! centralize hydrate-only read/write behavior; on the server every read
//! sees an empty store and writes are dropped.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::CurrentUser;
use crate::state::session::SessionContext;

/// Key holding the serialized [`CurrentUser`] record.
pub const CURRENT_USER_KEY: &str = "currentUser";
/// Key holding the role string.
pub const ROLE_KEY: &str = "role";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read a raw string value for `key`.
pub fn get_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a raw string value for `key`.
pub fn set_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable; dropping write to {key}");
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from storage.
pub fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Snapshot the persisted session.
pub fn load_session() -> SessionContext {
    let user = get_item(CURRENT_USER_KEY);
    let role = get_item(ROLE_KEY);
    SessionContext::from_raw(user.as_deref(), role.as_deref())
}

/// Key/value pairs written for a signed-in user.
///
/// # Errors
///
/// Returns an error if the user record cannot be serialized.
pub fn session_entries(user: &CurrentUser) -> Result<[(&'static str, String); 2], serde_json::Error> {
    let raw = serde_json::to_string(user)?;
    Ok([(CURRENT_USER_KEY, raw), (ROLE_KEY, user.role.clone())])
}

/// Persist the session for `user`.
///
/// # Errors
///
/// Returns an error if the user record cannot be serialized.
pub fn save_session(user: &CurrentUser) -> Result<(), serde_json::Error> {
    for (key, value) in session_entries(user)? {
        set_item(key, &value);
    }
    Ok(())
}

/// Drop both session keys.
pub fn clear_session() {
    remove_item(CURRENT_USER_KEY);
    remove_item(ROLE_KEY);
}
