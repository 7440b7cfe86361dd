//! DOM wiring for the easter-egg terminal.
//!
//! The transcript is append-only: each submitted command inserts its output
//! above the live input line, then swaps in a fresh input line at the
//! bottom. Only `clear` rewrites the transcript, back to a single empty
//! input line. Input is read exclusively from Enter presses on the
//! designated field while the terminal is visible.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlInputElement};

use crate::markup;
use crate::portfolio::PortfolioData;
use crate::terminal::{self, Reply};

use super::{app::App, dom, toast};

/// Wire the terminal if the page carries one.
pub fn init(app: Rc<App>, data: Rc<PortfolioData>) -> Result<(), JsValue> {
    let Some(surface) = dom::get("easterEggTerminal") else {
        return Ok(());
    };

    if let Some(trigger) = dom::get("easterEggTrigger") {
        let app = app.clone();
        let on_click = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            show(&app);
        }) as Box<dyn FnMut(_)>);
        trigger.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    if let Some(close) = dom::get("terminalClose") {
        let app = app.clone();
        let on_click = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            hide(&app);
        }) as Box<dyn FnMut(_)>);
        close.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    // Clicking the dimmed area around the terminal window closes it.
    {
        let app = app.clone();
        let surface_for_check = surface.clone();
        let on_click = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Element>().ok());
            if target.as_ref() == Some(&surface_for_check) {
                hide(&app);
            }
        }) as Box<dyn FnMut(_)>);
        surface.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    let on_key = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
        if !app.terminal_visible.get() || e.key() != "Enter" {
            return;
        }
        let Some(input) = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .filter(|i| i.id() == "terminalInput")
        else {
            return;
        };
        let pick = (js_sys::Math::random() * terminal::JOKES.len() as f64) as usize;
        match terminal::dispatch(&input.value(), &data, pick) {
            None => {}
            Some(Reply::Clear) => clear_transcript(),
            Some(Reply::Exit) => hide(&app),
            Some(Reply::Output(text)) => append_output(&input, &text),
        }
    }) as Box<dyn FnMut(_)>);
    dom::document()?.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();

    Ok(())
}

pub fn show(app: &App) {
    if app.terminal_visible.get() {
        return;
    }
    let Some(surface) = dom::get("easterEggTerminal") else {
        return;
    };
    let _ = surface.class_list().add_1("active");
    app.terminal_visible.set(true);
    focus_input();
    toast::show(app, "Terminal activated! 🎉");
}

fn hide(app: &App) {
    if let Some(surface) = dom::get("easterEggTerminal") {
        let _ = surface.class_list().remove_1("active");
    }
    app.terminal_visible.set(false);
}

/// Insert the output line above the live input line, append a fresh input
/// line, and retire the old one.
fn append_output(input: &HtmlInputElement, text: &str) {
    let Some(line) = input.closest(".terminal-input-line").ok().flatten() else {
        return;
    };
    let Some(body) = line.parent_element() else {
        return;
    };
    if let Ok(output) = dom::fragment(&markup::terminal_output(text)) {
        let _ = body.insert_before(&output, Some(line.as_ref()));
    }
    if let Ok(fresh) = dom::fragment(&markup::terminal_input_line()) {
        let _ = body.append_child(&fresh);
    }
    line.remove();
    focus_input();
}

fn clear_transcript() {
    dom::set_html("terminalBody", &markup::terminal_cleared());
    focus_input();
}

fn focus_input() {
    if let Some(body) = dom::get("terminalBody") {
        let inputs = body.query_selector_all(".terminal-input").ok();
        let last = inputs
            .as_ref()
            .and_then(|list| list.item(list.length().wrapping_sub(1)));
        if let Some(input) = last.and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            let _ = input.focus();
        }
    }
}
