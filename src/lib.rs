//! # velomax-client
//!
//! Leptos + WASM frontend for the VelocitMax task-management dashboard.
//!
//! This crate contains pages, components, application state, the typed REST
//! client, and the authentication/session lifecycle that gates routing. All
//! data lives behind the `/api` REST backend; the client keeps only the
//! bearer token in durable storage.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: set up logging and hydrate the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
