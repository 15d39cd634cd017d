//! # showcase
//!
//! Leptos + WASM frontend for a product catalog with an admin back office.
//!
//! The public catalog lists products with search and a detail overlay. The
//! admin side adds session login and a CRUD dashboard against the REST API.
//! Pure state lives in `state` and `util` so it can be tested natively; the
//! browser-facing layers are compiled in with the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
