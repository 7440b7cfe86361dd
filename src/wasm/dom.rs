//! Thin capability layer over `web_sys`.
//!
//! Optional elements come back as `Option` so an absent feature degrades to
//! a no-op; `require` is for elements a page cannot function without, where
//! absence is a configuration error surfaced as `Err`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, DocumentFragment, Element, HtmlElement, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// An element the page may or may not carry.
pub fn get(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

/// An element the page must carry.
pub fn require(id: &str) -> Result<Element, JsValue> {
    get(id).ok_or_else(|| JsValue::from_str(&format!("required element #{id} missing")))
}

pub fn set_text(id: &str, text: &str) {
    if let Some(el) = get(id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_attr(id: &str, name: &str, value: &str) {
    if let Some(el) = get(id) {
        let _ = el.set_attribute(name, value);
    }
}

/// Replace a container's children with markup built by the pure layer.
/// Wholesale replacement keeps re-rendering idempotent.
pub fn set_html(id: &str, html: &str) {
    if let Some(el) = get(id) {
        el.set_inner_html(html);
    }
}

/// Build a detached fragment from an HTML string via a `<template>`.
pub fn fragment(html: &str) -> Result<DocumentFragment, JsValue> {
    let template: web_sys::HtmlTemplateElement =
        document()?.create_element("template")?.dyn_into()?;
    template.set_inner_html(html.trim());
    Ok(template.content())
}

/// All elements matching `selector`, empty on a selector error.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Ok(doc) = document() else {
        return Vec::new();
    };
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn as_html(el: &Element) -> Option<&HtmlElement> {
    el.dyn_ref::<HtmlElement>()
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = as_html(el) {
        let _ = html.style().set_property(property, value);
    }
}

/// Run `f` once after `ms` milliseconds.
pub fn after(ms: i32, f: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(f);
    if let Ok(window) = window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}
