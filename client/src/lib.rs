//! # rental-reviews-client
//!
//! Leptos + WASM frontend for the host side of the car-rental platform:
//! the comment browser over a host's vehicles, the shared toast, and the
//! renter report dialog.
//!
//! ARCHITECTURE
//! ============
//! `state` holds pure reducers and view-model helpers (tested without a
//! browser), `net` talks to the REST backend, `components` and `pages`
//! render. Browser-only code is gated behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
