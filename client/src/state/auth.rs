//! Auth-session state for the current host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filled from a single profile fetch. The page gate reads `access` to decide
//! between the loading text, the permission-denied text, and the browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::HOST_ROLE;
use crate::net::types::ProfileRecord;

/// Result of the role check for the comments page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Roles have not arrived yet.
    Loading,
    Denied,
    Granted,
}

/// Profile of the signed-in user and its loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub profile: Option<ProfileRecord>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            profile: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Record a loaded profile.
    #[must_use]
    pub fn loaded(profile: ProfileRecord) -> Self {
        Self {
            profile: Some(profile),
            loading: false,
        }
    }

    /// Profile fetch failed; no roles are granted.
    #[must_use]
    pub fn failed() -> Self {
        Self {
            profile: None,
            loading: false,
        }
    }

    pub fn roles(&self) -> &[String] {
        self.profile.as_ref().map_or(&[], |profile| profile.roles.as_slice())
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles().iter().any(|r| r == role)
    }

    /// Authenticated user id, when the profile carries one.
    pub fn user_id(&self) -> Option<i64> {
        self.profile.as_ref().and_then(|profile| profile.id)
    }

    /// Gate for pages restricted to hosts.
    pub fn host_access(&self) -> Access {
        if self.loading {
            Access::Loading
        } else if self.has_role(HOST_ROLE) {
            Access::Granted
        } else {
            Access::Denied
        }
    }
}
