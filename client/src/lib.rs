//! # client
//!
//! Leptos + WASM frontend for the CC Group 4 collaborative task manager.
//!
//! This crate contains pages, components, application state, and network
//! helpers. The same components render on the server (`ssr`) and hydrate in
//! the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered
/// document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
