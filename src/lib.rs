//! # reqboard
//!
//! Leptos + WASM dashboard for reviewing business requirements: a fixed
//! inventory of requirement records, summary tiles, status and department
//! chart panels, and a generated-stories modal.
//!
//! This crate contains pages, components, application state, and chart
//! geometry helpers. The `hydrate` feature builds the WASM client; the `ssr`
//! feature adds the axum serve binary.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
