//! Navigation chrome shared by both pages: the mobile menu, the
//! back-to-top button, and the footer year stamp.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};

use crate::config::BACK_TO_TOP_OFFSET;

use super::dom;

pub fn init() {
    mobile_menu();
    back_to_top();
    dom::set_text("year", &js_sys::Date::new_0().get_full_year().to_string());
}

fn mobile_menu() {
    let (Some(toggle), Some(links)) = (dom::get("navToggle"), dom::get("navLinks")) else {
        return;
    };

    {
        let links = links.clone();
        let on_toggle = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let _ = links.class_list().toggle("show");
        }) as Box<dyn FnMut(_)>);
        let _ = toggle.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref());
        on_toggle.forget();
    }

    // A tapped nav link closes the menu.
    for link in dom::query_all("#navLinks a") {
        let links = links.clone();
        let on_click = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let _ = links.class_list().remove_1("show");
        }) as Box<dyn FnMut(_)>);
        let _ = link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    // So does a click anywhere outside the menu and its toggle.
    let Ok(document) = dom::document() else {
        return;
    };
    let on_outside = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        if !links.class_list().contains("show") {
            return;
        }
        let target = e.target().and_then(|t| t.dyn_into::<Element>().ok());
        let inside = target.is_some_and(|el| {
            links.contains(Some(el.as_ref())) || toggle.contains(Some(el.as_ref()))
        });
        if !inside {
            let _ = links.class_list().remove_1("show");
        }
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback("click", on_outside.as_ref().unchecked_ref());
    on_outside.forget();
}

fn back_to_top() {
    let Some(button) = dom::get("backToTop") else {
        return;
    };
    let Ok(window) = dom::window() else {
        return;
    };

    {
        let button = button.clone();
        let window = window.clone();
        let on_scroll = Closure::wrap(Box::new(move || {
            let past = window.page_y_offset().unwrap_or(0.0) > BACK_TO_TOP_OFFSET;
            dom::set_style(&button, "opacity", if past { "1" } else { "0" });
            dom::set_style(&button, "visibility", if past { "visible" } else { "hidden" });
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        on_scroll.forget();
    }

    let on_click = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        if let Ok(window) = dom::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}
