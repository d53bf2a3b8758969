//! # client
//!
//! Leptos frontend demonstrating authenticated routing: a public page, a
//! login page, and a protected page behind a route guard that sends
//! anonymous visitors to login and returns them to where they were headed.
//!
//! Rendered on the server by the `gatehouse` host (`ssr` feature) and
//! hydrated in the browser (`hydrate` feature).

pub mod app;
pub mod components;
pub mod pages;
pub mod routing;
pub mod state;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating gatehouse client");
    leptos::mount::hydrate_body(app::App);
}
