//! # phonebook
//!
//! Leptos + WASM single-page contacts manager. Users register, log in,
//! and manage a personal contact list backed by the remote Connections
//! API.
//!
//! Client-side stores hold the session, the contact list, and UI state;
//! asynchronous flows synchronize them with the API. Browser-only code
//! (HTTP, localStorage, timers, mounting) is gated behind the `hydrate`
//! feature so the pure core builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: set up panic reporting and logging, then mount the
/// application to `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
