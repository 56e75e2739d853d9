//! # client
//!
//! Leptos + WASM frontend for CDN Explorer, an interactive walkthrough of how
//! a content delivery network cuts latency and shields the origin.
//!
//! `state` holds browser-free widget models driven by a simulated clock,
//! `components` renders them, and `util::timer` bridges the simulated clock
//! to real browser timeouts when hydrated.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
