#![cfg(target_arch = "wasm32")]

//! In-browser smoke tests for the DOM-facing pieces that the native suite
//! cannot reach.

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn template_fragment_builds_detached_markup() {
    let doc = document();
    let template: web_sys::HtmlTemplateElement = doc
        .create_element("template")
        .unwrap()
        .dyn_into()
        .unwrap();
    template.set_inner_html(portfolio_wasm::markup::terminal_cleared().trim());

    let fragment = template.content();
    let inputs = fragment.query_selector_all(".terminal-input").unwrap();
    assert_eq!(inputs.length(), 1, "clear leaves exactly one input line");
}

#[wasm_bindgen_test]
fn theme_attribute_follows_the_applied_value() {
    let root = document().document_element().unwrap();
    for theme in ["dark", "light", "dark"] {
        root.set_attribute("data-theme", theme).unwrap();
        assert_eq!(root.get_attribute("data-theme").as_deref(), Some(theme));
    }
}

#[wasm_bindgen_test]
fn theme_preference_round_trips_through_storage() {
    let window = web_sys::window().unwrap();
    let Ok(Some(storage)) = window.local_storage() else {
        // Storage disabled is a supported configuration; nothing to assert.
        return;
    };
    storage.set_item("theme-preference", "light").unwrap();
    assert_eq!(
        storage.get_item("theme-preference").unwrap().as_deref(),
        Some("light")
    );
    storage.remove_item("theme-preference").unwrap();
}

#[wasm_bindgen_test(async)]
async fn fetching_a_missing_resource_is_not_ok() {
    let window = web_sys::window().unwrap();
    let resp = wasm_bindgen_futures::JsFuture::from(
        window.fetch_with_str("definitely-not-here.json"),
    )
    .await;
    // Either the fetch rejects outright or resolves with a failure status;
    // both count as the unreachable case.
    if let Ok(value) = resp {
        let resp: web_sys::Response = value.dyn_into().unwrap();
        assert!(!resp.ok());
    }
}
