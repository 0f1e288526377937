//! Persisted session token in `localStorage`.
//!
//! The token survives page reloads under a fixed key: read once at
//! startup by the session controller, written on every successful
//! login/registration, cleared on logout and on a failed refresh.
//! Requires a browser environment; native builds see no token and writes
//! are no-ops.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "phonebook_token";

/// Read the persisted token.
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the token.
pub fn write(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
