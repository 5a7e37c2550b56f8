//! # pitchperfect
//!
//! Leptos + WASM frontend for the PitchPerfect portfolio site. Replaces the
//! hand-rolled `script.js` behaviors with a Rust-native UI layer.
//!
//! This crate contains the single home page, its interactive widgets (the
//! sliding service highlight, the mobile navigation panel, the work preview
//! modal, and the contact form), the pure state machines behind them, and the
//! one outbound HTTP call. All state logic compiles and tests natively; the
//! browser wiring is gated behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
