#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Client-side logic for a personal portfolio site.
//!
//! The crate builds as both an `rlib` (so `cargo test` on the host can
//! exercise the pure modules below) and a `cdylib` loaded by the two static
//! pages. Everything that touches the DOM lives under the wasm32-only
//! `wasm` module.

pub mod config;
pub mod escape;
pub mod gallery;
pub mod icons;
pub mod markup;
pub mod portfolio;
pub mod slug;
pub mod terminal;
pub mod theme;

// Only compile browser-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod app;
    mod cursor;
    mod detail;
    mod dom;
    mod effects;
    mod loader;
    mod modal;
    mod nav;
    mod particles;
    mod render;
    mod term;
    mod theme;
    mod toast;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        app::start()
    }
}
