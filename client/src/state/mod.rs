//! Client-side state containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain data types wrapped in `RwSignal` and provided through Leptos
//! context by `app::App`. Transitions are pure so they are tested without a
//! browser.

pub mod auth;
pub mod comments;
pub mod pagination;
pub mod report;
pub mod toast;
