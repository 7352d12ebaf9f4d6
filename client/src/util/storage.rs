//! Browser `localStorage` access.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow (outside this crate) stores the bearer token under
//! `auth_token`; every REST call reads it from here.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::config::AUTH_TOKEN_KEY;

/// Read a raw string value from `localStorage` for `key`.
pub fn load_string(key: &str) -> Option<String> {
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

/// Bearer token for the current session, if the user is logged in.
pub fn auth_token() -> Option<String> {
    load_string(AUTH_TOKEN_KEY).filter(|token| !token.is_empty())
}
