//! LIMITLESS marketplace web client.
//!
//! ARCHITECTURE
//! ============
//! Leptos view layer for the rental-property marketplace: role selection,
//! preference collection, dashboards, profile, and rental-history views.
//! Pages orchestrate fetches against the external REST API, components
//! render, `state` carries the shared contexts, and `util` isolates
//! browser concerns. Authentication and persistence live in external
//! collaborators; this crate only renders and calls.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
