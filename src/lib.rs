//! # finboard
//!
//! Leptos + WASM frontend for a personal finance tracker. Tracks incomes,
//! expenses, categories, and monthly budgets against a REST backend, with
//! an admin surface for user management and aggregate reports.
//!
//! This crate contains pages, components, application state, and network
//! types. Authentication state persists in browser `localStorage` and is
//! restored once on startup before any route guard makes a decision.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: set up panic/log forwarding and hydrate the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
