//! One-shot fetch of the portfolio document plus the loading-screen
//! progress plumbing.
//!
//! A failed load is terminal for the page view: the progress indicator
//! stops and the message distinguishes an unreachable resource from a
//! malformed one. No retry, no timeout.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, Response};

use crate::config;
use crate::portfolio::PortfolioData;

use super::dom;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to fetch data.json: {0}. Check that the file exists and the page is served over HTTP.")]
    Unreachable(String),
    #[error("Invalid JSON in data.json: {0}. Please check the file format.")]
    Malformed(String),
}

pub async fn fetch_portfolio() -> Result<PortfolioData, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Unreachable("no window".into()))?;
    let resp = JsFuture::from(window.fetch_with_str(config::DATA_PATH))
        .await
        .map_err(|e| LoadError::Unreachable(describe(&e)))?;
    let resp: Response = resp
        .dyn_into()
        .map_err(|_| LoadError::Unreachable("fetch returned a non-Response".into()))?;
    if !resp.ok() {
        return Err(LoadError::Unreachable(format!(
            "HTTP status {} ({})",
            resp.status(),
            resp.status_text()
        )));
    }
    let body = JsFuture::from(resp.text().map_err(|e| LoadError::Unreachable(describe(&e)))?)
        .await
        .map_err(|e| LoadError::Unreachable(describe(&e)))?;
    let body = body.as_string().unwrap_or_default();
    serde_json::from_str(&body).map_err(|e| LoadError::Malformed(e.to_string()))
}

fn describe(v: &JsValue) -> String {
    v.as_string().unwrap_or_else(|| format!("{v:?}"))
}

/// Handles on the loading screen's progress bar and status text. Both are
/// optional; a page without them just loads silently.
pub struct Progress {
    bar: Option<Element>,
    text: Option<Element>,
}

impl Progress {
    pub fn attach() -> Self {
        let text = dom::document()
            .ok()
            .and_then(|d| d.query_selector(".loading-text").ok().flatten());
        Progress {
            bar: dom::get("progressBar"),
            text,
        }
    }

    pub fn set(&self, percent: u32, message: &str) {
        if let Some(bar) = &self.bar {
            dom::set_style(bar, "width", &format!("{percent}%"));
        }
        if let Some(text) = &self.text {
            text.set_text_content(Some(message));
        }
    }

    /// Stop the indicator and show the failure text in place of the status
    /// line. Main content stays hidden.
    pub fn fail(&self, message: &str) {
        if let Some(bar) = &self.bar {
            dom::set_style(bar, "width", "0%");
        }
        if let Some(text) = &self.text {
            text.set_text_content(Some(message));
            dom::set_style(text, "color", "#ff4757");
        }
    }
}

/// Timer-backed pause between staged progress messages.
pub async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// Fade the loading screen out, reveal main content, and drop the loading
/// screen from the DOM once its fade transition has finished.
pub fn reveal_main() {
    if let Some(screen) = dom::get("loadingScreen") {
        let _ = screen.class_list().add_1("fade-out");
        dom::after(500, move || screen.remove());
    }
    if let Some(main) = dom::get("mainContent") {
        dom::set_style(&main, "opacity", "1");
        dom::set_style(&main, "visibility", "visible");
    }
}
