//! # landing-client
//!
//! Leptos + WASM front end for the link-in-bio landing page.
//!
//! The page content comes from `content/site.json`. Interaction logic lives
//! in the `landing` crate; this crate renders the page, turns DOM events into
//! router commands, and carries out the effects the router returns.
//!
//! | Module | Role |
//! |--------|------|
//! | `app` | Root component and context providers |
//! | `components` | Profile, links, menu, modals, theme toggle, live region |
//! | `config` | Embedded site content |
//! | `listeners` | Window events and start-up housekeeping |
//! | `pages` | The landing page |
//! | `state` | Modal host, theme, announcer |
//! | `util` | Browser glue: history, storage, DOM, observers, analytics |
//!
//! Browser access is behind the `csr` feature; without it every helper is a
//! no-op so the crate tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod listeners;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }

    let config = config::SiteConfig::load();
    leptos::mount::mount_to_body(move || view! { <app::App config/> });
}
