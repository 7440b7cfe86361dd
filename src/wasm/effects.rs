//! Post-load flourishes: the typewriter headline and the animated
//! counters.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::config::{
    COUNTER_MS, COUNTER_STAGGER_MS, COUNTER_START_MS, TYPE_CHAR_MS, TYPE_START_MS,
};
use crate::portfolio::PortfolioData;

use super::dom;

pub fn init(data: &PortfolioData) {
    let name = data.personal_info.name.clone();
    dom::after(TYPE_START_MS, move || typewriter("name", name));

    dom::after(COUNTER_START_MS, || {
        for (i, span) in dom::query_all(".animated-counter span").into_iter().enumerate() {
            let Some(target) = span
                .text_content()
                .and_then(|t| t.trim().parse::<f64>().ok())
            else {
                continue;
            };
            dom::after(i as i32 * COUNTER_STAGGER_MS, move || {
                animate_counter(span, target)
            });
        }
    });
}

/// Re-type `text` into the element one character per tick.
fn typewriter(id: &str, text: String) {
    let Some(el) = dom::get(id) else {
        return;
    };
    el.set_text_content(Some(""));
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return;
    }

    let shown = Cell::new(0_usize);
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        shown.set(shown.get() + 1);
        let prefix: String = chars[..shown.get()].iter().collect();
        el.set_text_content(Some(&prefix));
        if shown.get() < chars.len() {
            schedule(&f, TYPE_CHAR_MS);
        }
    }) as Box<dyn FnMut()>));
    schedule(&g, TYPE_CHAR_MS);
}

/// Count from zero up to `target` over the counter duration, one step per
/// animation frame.
fn animate_counter(span: Element, target: f64) {
    let increment = target / (COUNTER_MS / 16.0);
    let current = Cell::new(0.0_f64);

    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        current.set(current.get() + increment);
        if current.get() < target {
            span.set_text_content(Some(&(current.get().floor() as u64).to_string()));
            if let Ok(window) = dom::window() {
                let _ = window
                    .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
            }
        } else {
            span.set_text_content(Some(&(target as u64).to_string()));
        }
    }) as Box<dyn FnMut()>));
    if let Ok(window) = dom::window() {
        let _ =
            window.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn schedule(f: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, ms: i32) {
    if let Ok(window) = dom::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            f.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            ms,
        );
    }
}
