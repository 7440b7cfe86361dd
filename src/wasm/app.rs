//! Application state and page dispatch.
//!
//! One [`App`] is constructed at startup and handed to every initializer by
//! `Rc`, so components share state through it instead of module-level
//! globals. Which flow runs is decided by the `data-page` marker on
//! `<body>`.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::theme::Theme;

use super::{cursor, detail, dom, effects, loader, nav, particles, render, term, theme, toast};

/// Shared state for one page view.
pub struct App {
    /// Latest raw pointer position, written by a single mousemove listener.
    pub mouse: Cell<(f64, f64)>,
    pub terminal_visible: Cell<bool>,
    /// Pending toast hide-timer, cleared when a new toast replaces it.
    pub toast_timer: Cell<Option<i32>>,
    pub theme: Cell<Theme>,
}

impl App {
    fn new() -> Self {
        App {
            mouse: Cell::new((0.0, 0.0)),
            terminal_visible: Cell::new(false),
            toast_timer: Cell::new(None),
            theme: Cell::new(Theme::default()),
        }
    }
}

pub fn start() -> Result<(), JsValue> {
    let document = dom::document()?;
    let app = Rc::new(App::new());
    track_mouse(&app)?;

    let page = document
        .body()
        .and_then(|b| b.get_attribute("data-page"))
        .unwrap_or_default();
    match page.as_str() {
        "project-detail" => wasm_bindgen_futures::spawn_local(detail::run(app)),
        _ => wasm_bindgen_futures::spawn_local(run_home(app)),
    }
    Ok(())
}

/// One document-level mousemove listener feeds both the particle field and
/// the cursor follower.
fn track_mouse(app: &Rc<App>) -> Result<(), JsValue> {
    let document = dom::document()?;
    let app = app.clone();
    let on_move = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        app.mouse.set((e.client_x() as f64, e.client_y() as f64));
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();
    Ok(())
}

async fn run_home(app: Rc<App>) {
    if let Err(e) = home(app).await {
        web_sys::console::error_1(&e);
    }
}

/// The home-page flow: staged loading, render, then the cosmetic layers.
async fn home(app: Rc<App>) -> Result<(), JsValue> {
    let progress = loader::Progress::attach();
    progress.set(10, "Initializing...");
    loader::sleep(500).await;
    progress.set(30, "Fetching data...");

    let data = match loader::fetch_portfolio().await {
        Ok(data) => data,
        Err(err) => {
            web_sys::console::error_1(&format!("portfolio load failed: {err}").into());
            progress.fail(&err.to_string());
            return Ok(());
        }
    };

    progress.set(60, "Processing content...");
    loader::sleep(300).await;
    render::populate(&app, &data)?;

    progress.set(80, "Initializing features...");
    loader::sleep(200).await;
    effects::init(&data);

    progress.set(100, "Ready!");
    loader::sleep(300).await;
    loader::reveal_main();

    let data = Rc::new(data);
    theme::init(app.clone())?;
    particles::init(app.clone())?;
    cursor::init(app.clone());
    nav::init();
    term::init(app.clone(), data)?;

    loader::sleep(1000).await;
    toast::show(&app, "Welcome to my portfolio! ✨");
    Ok(())
}
