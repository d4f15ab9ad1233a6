//! # client
//!
//! Leptos + WASM front end for the timeline application.
//!
//! This crate contains pages, components, the client-side authentication
//! session (store, operations, cookie hint), the Backendless REST client,
//! and the static timeline content.

pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
