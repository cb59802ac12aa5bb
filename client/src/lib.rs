//! # plantcare-client
//!
//! Leptos + WASM frontend for the PlantCare site: public plant listings,
//! email/password and Google sign-in, and a guarded dashboard for managing
//! your own plants.
//!
//! The crate builds twice: with `ssr` for the Axum server to render pages,
//! and with `hydrate` for the browser bundle that takes over those pages.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating plantcare");
    leptos::mount::hydrate_body(app::App);
}
