//! Durable session-token storage.
//!
//! The bearer token lives under a single `localStorage` key so a signed-in
//! session survives reloads. Reads and writes are synchronous. Requires a
//! browser environment; SSR paths safely no-op.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "velomax_token";

/// Read the stored session token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(value) = storage.get_item(STORAGE_KEY) {
                    return value;
                }
            }
        }
        None
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session token.
pub fn write_token(token: &str) {
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

/// Remove the stored session token. Safe to call when none is stored.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
