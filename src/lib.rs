//! # invoice-form
//!
//! Leptos + WASM frontend for creating and editing invoices.
//!
//! Form rules live in `state` as plain Rust so they run natively under
//! `cargo test`; `pages` and `components` bind them to the DOM, and `net`
//! talks to the invoice REST endpoints.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and the panic hook, then hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
