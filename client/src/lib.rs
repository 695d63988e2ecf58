//! # dashboard-client
//!
//! Leptos + WASM frontend for the AI agent dashboard.
//!
//! This crate contains pages, components, session state, the identity
//! provider client, and the route guards that keep the visible screen in
//! line with the live authentication state.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
