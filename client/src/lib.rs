//! # client
//!
//! Leptos front-end for PromptoType.ai: the marketing pages, the idea wizard,
//! the simulated build screen, the prototype showcase and the template
//! gallery.
//!
//! Compiled twice: with `ssr` for server rendering inside `promptotype`, and
//! with `hydrate` to WASM for the browser. Build progress logic lives in the
//! framework-free `buildsim` crate; this crate only hosts it.

#![recursion_limit = "256"]

pub mod app;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
