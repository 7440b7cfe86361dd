//! Transient toast notifications on one shared surface.
//!
//! A new toast replaces the pending hide timer, so overlapping calls
//! simply restart the countdown on the same element. Last call wins.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config::TOAST_MS;

use super::{app::App, dom};

pub fn show(app: &App, message: &str) {
    let Some(toast) = dom::get("toast") else {
        return;
    };
    let Ok(window) = dom::window() else {
        return;
    };

    if let Some(handle) = app.toast_timer.take() {
        window.clear_timeout_with_handle(handle);
    }

    toast.set_text_content(Some(message));
    let _ = toast.class_list().add_1("show");

    let hide = Closure::once_into_js(move || {
        let _ = toast.class_list().remove_1("show");
    });
    if let Ok(handle) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(hide.unchecked_ref(), TOAST_MS)
    {
        app.toast_timer.set(Some(handle));
    }
}
