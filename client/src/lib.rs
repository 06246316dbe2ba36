//! # client
//!
//! Leptos + WASM frontend for the NEXEM construction services site.
//!
//! This crate contains the page, its components, the theme controller and
//! menu state, and the static page content. The `ssr` feature renders it
//! on the server; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod site;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    util::logging::init();
    log::debug!("hydrating {}", site::BASE_PATH);
    leptos::mount::hydrate_body(app::App);
}
