//! Image modal for the detail-page gallery.
//!
//! The navigable set is the image-only subset of the gallery (items with a
//! video are excluded). Prev/next clamp at the ends, and the boundary
//! control is hidden outright rather than disabled. Keyboard handling is
//! inert while the modal is closed.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::gallery::GalleryCursor;

use super::dom;

struct Modal {
    surface: Element,
    image: Element,
    prev_button: Option<Element>,
    next_button: Option<Element>,
    /// `(src, alt)` pairs of the navigable images.
    images: Vec<(String, String)>,
    cursor: RefCell<Option<GalleryCursor>>,
}

impl Modal {
    fn open(&self, index: usize) {
        *self.cursor.borrow_mut() = GalleryCursor::new(self.images.len(), index);
        self.show_current();
        let _ = self.surface.class_list().add_1("active");
        set_body_overflow("hidden");
    }

    fn close(&self) {
        *self.cursor.borrow_mut() = None;
        let _ = self.surface.class_list().remove_1("active");
        set_body_overflow("");
    }

    fn is_open(&self) -> bool {
        self.surface.class_list().contains("active")
    }

    fn prev(&self) {
        if let Some(cursor) = self.cursor.borrow_mut().as_mut() {
            cursor.prev();
        }
        self.show_current();
    }

    fn next(&self) {
        if let Some(cursor) = self.cursor.borrow_mut().as_mut() {
            cursor.next();
        }
        self.show_current();
    }

    fn show_current(&self) {
        let Some(cursor) = *self.cursor.borrow() else {
            return;
        };
        if let Some((src, alt)) = self.images.get(cursor.index()) {
            let _ = self.image.set_attribute("src", src);
            let _ = self.image.set_attribute("alt", alt);
        }
        // Boundary controls disappear entirely at the ends.
        if let Some(prev) = &self.prev_button {
            dom::set_style(prev, "display", if cursor.at_start() { "none" } else { "flex" });
        }
        if let Some(next) = &self.next_button {
            dom::set_style(next, "display", if cursor.at_end() { "none" } else { "flex" });
        }
    }
}

fn set_body_overflow(value: &str) {
    if let Some(body) = dom::document().ok().and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}

fn item_image(item: &Element) -> Option<Element> {
    let has_video = item.query_selector("video").ok().flatten().is_some();
    if has_video {
        return None;
    }
    item.query_selector("img").ok().flatten()
}

/// Wire the modal over the rendered gallery items. Without a modal surface
/// or any gallery items the feature does not initialize.
pub fn init() -> Result<(), JsValue> {
    let Some(surface) = dom::get("imageModal") else {
        return Ok(());
    };
    let items = dom::query_all(".gallery-item");
    if items.is_empty() {
        return Ok(());
    }
    let image = dom::require("modalImage")?;

    // Image-only subset, remembering each clickable item's position in it.
    let mut images = Vec::new();
    let mut openers: Vec<(Element, usize)> = Vec::new();
    for item in &items {
        if let Some(img) = item_image(item) {
            let src = img.get_attribute("src").unwrap_or_default();
            let alt = img.get_attribute("alt").unwrap_or_default();
            openers.push((item.clone(), images.len()));
            images.push((src, alt));
        }
    }
    if images.is_empty() {
        return Ok(());
    }

    let modal = Rc::new(Modal {
        surface: surface.clone(),
        image,
        prev_button: dom::get("modalPrev"),
        next_button: dom::get("modalNext"),
        images,
        cursor: RefCell::new(None),
    });

    for (item, index) in openers {
        let modal = modal.clone();
        let on_click = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            modal.open(index);
        }) as Box<dyn FnMut(_)>);
        item.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    if let Some(close) = dom::get("imageModalClose") {
        let modal = modal.clone();
        let on_click = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            modal.close();
        }) as Box<dyn FnMut(_)>);
        close.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    if let Some(prev) = &modal.prev_button {
        let modal = modal.clone();
        let on_click = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            modal.prev();
        }) as Box<dyn FnMut(_)>);
        prev.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    if let Some(next) = &modal.next_button {
        let modal = modal.clone();
        let on_click = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            modal.next();
        }) as Box<dyn FnMut(_)>);
        next.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    // Clicking the backdrop (the surface itself, outside the image) closes.
    {
        let modal = modal.clone();
        let on_click = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if target == modal.surface || target.class_list().contains("image-modal__backdrop") {
                modal.close();
            }
        }) as Box<dyn FnMut(_)>);
        surface.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    // Escape closes, arrows navigate; all inert while closed.
    {
        let modal = modal.clone();
        let on_key = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
            if !modal.is_open() {
                return;
            }
            match e.key().as_str() {
                "Escape" => modal.close(),
                "ArrowLeft" => modal.prev(),
                "ArrowRight" => modal.next(),
                _ => {}
            }
        }) as Box<dyn FnMut(_)>);
        dom::document()?
            .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
        on_key.forget();
    }

    Ok(())
}
