//! Floating cursor follower.
//!
//! Each frame the follower covers a fixed fraction of the remaining
//! distance to the raw pointer, so it approaches smoothly and never jumps.
//! Purely cosmetic: without its element the feature is skipped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config::CURSOR_EASE;

use super::{app::App, dom};

pub fn init(app: Rc<App>) {
    let Some(follower) = dom::get("cursorFollower") else {
        return;
    };

    // Eased position, owned by the animation closure.
    let fx = Cell::new(0.0_f64);
    let fy = Cell::new(0.0_f64);

    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    {
        let follower = follower.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let (mx, my) = app.mouse.get();
            fx.set(fx.get() + (mx - fx.get()) * CURSOR_EASE);
            fy.set(fy.get() + (my - fy.get()) * CURSOR_EASE);
            dom::set_style(&follower, "left", &format!("{}px", fx.get()));
            dom::set_style(&follower, "top", &format!("{}px", fy.get()));

            web_sys::window()
                .unwrap()
                .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref())
                .unwrap();
        }) as Box<dyn FnMut()>));
    }
    if let Ok(window) = dom::window() {
        let _ = window
            .request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }

    wire_hover(&follower);
    wire_press(&follower);
}

/// Grow and fade the follower while hovering anything interactive.
fn wire_hover(follower: &web_sys::Element) {
    for el in dom::query_all("a, button, .gallery-item") {
        {
            let follower = follower.clone();
            let enter = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
                dom::set_style(&follower, "transform", "translate(-50%, -50%) scale(2)");
                dom::set_style(&follower, "opacity", "0.3");
            }) as Box<dyn FnMut(_)>);
            let _ = el.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
            enter.forget();
        }
        {
            let follower = follower.clone();
            let leave = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
                dom::set_style(&follower, "transform", "translate(-50%, -50%) scale(1)");
                dom::set_style(&follower, "opacity", "0.6");
            }) as Box<dyn FnMut(_)>);
            let _ = el.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
            leave.forget();
        }
    }
}

/// Mark the follower active while the pointer is held down.
fn wire_press(follower: &web_sys::Element) {
    let Ok(document) = dom::document() else {
        return;
    };
    {
        let follower = follower.clone();
        let down = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let _ = follower.class_list().add_1("active");
        }) as Box<dyn FnMut(_)>);
        let _ = document.add_event_listener_with_callback("mousedown", down.as_ref().unchecked_ref());
        down.forget();
    }
    {
        let follower = follower.clone();
        let up = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let _ = follower.class_list().remove_1("active");
        }) as Box<dyn FnMut(_)>);
        let _ = document.add_event_listener_with_callback("mouseup", up.as_ref().unchecked_ref());
        up.forget();
    }
}
