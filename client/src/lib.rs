//! # client
//!
//! Leptos + WASM front-desk shell for the Innkeeper hotel management app.
//!
//! This crate contains the route table, the protected-route gate, the
//! application stores, the page loader, and the REST auth client. Page bodies
//! are intentionally thin; the backend API lives elsewhere and is reached
//! through `net::api`.

pub mod app;
pub mod components;
pub mod config;
pub mod loader;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating innkeeper client");
    leptos::mount::hydrate_body(app::App);
}
