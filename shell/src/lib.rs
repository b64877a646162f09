//! # shell
//!
//! Leptos + WASM application shell. Decides which structural regions (menu,
//! breadcrumbs, sider, footer, routed content or a not-found placeholder)
//! surround each page, and maintains the auth-loader signal fed by a
//! reactive user watcher and a poll timer.
//!
//! Pure decision logic lives in `state`; `components` renders it and `util`
//! wires router and timer inputs.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and hydrates the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logging unavailable: {e}");
    }
    log::info!("hydrating application shell");
    leptos::mount::hydrate_body(app::App);
}
