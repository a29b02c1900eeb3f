//! # client
//!
//! Leptos + WASM frontend for PrimeCFO.ai: the marketing landing page and the
//! signed-in financial workspace (dashboard, reports, AI insights, client
//! management, QuickBooks connection and settings).
//!
//! This crate contains pages, components, application state, fixture data,
//! formatting helpers, and the clients for the identity provider and the
//! app's own insight API. The `server` crate renders it with the `ssr`
//! feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod fixtures;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
