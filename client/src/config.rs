//! Client-side constants and build-time configuration.
//!
//! The backend base URL is baked in at compile time via `RENTAL_API_BASE`;
//! empty means same-origin, which is what the SSR host forwards. The
//! profile page lives outside this app; `RENTAL_PROFILE_URL` overrides where
//! the back button leads.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key holding the bearer token issued at login.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Role that grants access to the host comment browser.
pub const HOST_ROLE: &str = "HOST";

/// Prefix prepended to every `/api/...` path.
pub fn api_base() -> &'static str {
    option_env!("RENTAL_API_BASE").map_or("", |base| base.trim_end_matches('/'))
}

/// Back-button target when `RENTAL_PROFILE_URL` is unset.
pub const DEFAULT_PROFILE_URL: &str = "/perfil";

/// Full-page URL of the user's profile.
pub fn profile_url() -> &'static str {
    resolve_profile_url(option_env!("RENTAL_PROFILE_URL"))
}

fn resolve_profile_url(raw: Option<&'static str>) -> &'static str {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_PROFILE_URL,
    }
}
