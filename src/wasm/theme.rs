//! Theme persistence and the toggle button.
//!
//! The preference lives under one localStorage key. Storage being disabled
//! is swallowed silently: the session then runs on the in-memory state in
//! [`App`], starting from the OS scheme preference or dark.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::config::THEME_STORAGE_KEY;
use crate::theme::Theme;

use super::{app::App, dom};

pub fn init(app: Rc<App>) -> Result<(), JsValue> {
    apply(&app, load_preference());

    if let Some(button) = dom::get("themeToggle") {
        let app = app.clone();
        let on_click = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            apply(&app, app.theme.get().toggle());
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

/// Reflect `theme` in the document attribute, the toggle icon, storage,
/// and the in-memory state, in that order.
pub fn apply(app: &App, theme: Theme) {
    if let Some(root) = dom::document().ok().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    if let Some(button) = dom::get("themeToggle") {
        button.set_inner_html(&format!(r#"<i class="{}"></i>"#, theme.toggle_icon()));
    }
    persist(theme);
    app.theme.set(theme);
}

fn persist(theme: Theme) {
    if let Ok(window) = dom::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
        }
    }
}

/// Stored value if valid, else the OS scheme preference, else dark.
fn load_preference() -> Theme {
    let Ok(window) = dom::window() else {
        return Theme::default();
    };
    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(saved)) = storage.get_item(THEME_STORAGE_KEY) {
            if let Some(theme) = Theme::from_str(&saved) {
                return theme;
            }
        }
    }
    match window.match_media("(prefers-color-scheme: dark)") {
        Ok(Some(mq)) if !mq.matches() => Theme::Light,
        _ => Theme::Dark,
    }
}
