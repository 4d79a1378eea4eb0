//! # takeout-web
//!
//! Leptos + WASM frontend shell for the takeout platform: customer,
//! restaurant, rider, and platform-admin views share one router.
//!
//! This crate owns client-side navigation (route catalog and role-based
//! guard), the persisted session, the login flow, and resolution of backend
//! API URLs against the configured base address.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// Browser entry point: validates config, then hydrates the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    match config::init() {
        Ok(api) => log::info!("api base: {}", api.base),
        Err(e) => {
            log::error!("refusing to start: {e}");
            return;
        }
    }

    leptos::mount::hydrate_body(app::App);
}
