//! # client
//!
//! Leptos + WASM frontend for the personal portfolio site.
//!
//! This crate contains the catalog data, the portfolio and theme stores,
//! the shared read-only context handed to components, and the pages and
//! chrome that render them. The `ssr` feature renders on the server; the
//! `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating portfolio");
    leptos::mount::hydrate_body(app::App);
}
