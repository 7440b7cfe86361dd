//! Drifting-dot canvas background.
//!
//! The field runs for the lifetime of the page on a `request_animation_frame`
//! loop. Resizing regenerates every particle from scratch rather than
//! rescaling the old set.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::{PARTICLE_CAP, PARTICLE_DENSITY_DIVISOR, REPEL_FACTOR, REPEL_RADIUS};

use super::{app::App, dom};

const FALLBACK_ACCENT: &str = "#7c5cff";

struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    size: f64,
    opacity: f64,
}

impl Particle {
    fn random(width: f64, height: f64) -> Particle {
        let rand = js_sys::Math::random;
        Particle {
            x: rand() * width,
            y: rand() * height,
            vx: (rand() - 0.5) * 0.5,
            vy: (rand() - 0.5) * 0.5,
            size: rand() * 2.0 + 1.0,
            opacity: rand() * 0.5 + 0.1,
        }
    }

    /// Advance one frame: drift, reflect off each boundary independently,
    /// then drift away from a nearby pointer. The repulsion is a soft,
    /// unnormalized offset bias.
    fn step(&mut self, width: f64, height: f64, mouse: (f64, f64)) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }

        let dx = mouse.0 - self.x;
        let dy = mouse.1 - self.y;
        if (dx * dx + dy * dy).sqrt() < REPEL_RADIUS {
            self.x -= dx * REPEL_FACTOR;
            self.y -= dy * REPEL_FACTOR;
        }
    }
}

fn regenerate(particles: &mut Vec<Particle>, width: f64, height: f64) {
    particles.clear();
    let count = PARTICLE_CAP.min((width / PARTICLE_DENSITY_DIVISOR) as usize);
    for _ in 0..count {
        particles.push(Particle::random(width, height));
    }
}

fn fit_to_window(canvas: &HtmlCanvasElement) -> Result<(f64, f64), JsValue> {
    let window = dom::window()?;
    let w = window.inner_width()?.as_f64().unwrap_or(0.0);
    let h = window.inner_height()?.as_f64().unwrap_or(0.0);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    Ok((w, h))
}

fn accent_color() -> String {
    let color = dom::window()
        .ok()
        .and_then(|w| {
            let root = w.document()?.document_element()?;
            w.get_computed_style(&root).ok().flatten()
        })
        .and_then(|style| style.get_property_value("--accent").ok())
        .map(|c| c.trim().to_string())
        .unwrap_or_default();
    if color.is_empty() {
        FALLBACK_ACCENT.to_string()
    } else {
        color
    }
}

/// Start the field on `#particleCanvas`. Without that canvas the feature
/// simply does not initialize.
pub fn init(app: Rc<App>) -> Result<(), JsValue> {
    let Some(canvas) = dom::get("particleCanvas") else {
        return Ok(());
    };
    let canvas: HtmlCanvasElement = canvas.dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d canvas context unavailable")?
        .dyn_into()?;

    let particles: Rc<RefCell<Vec<Particle>>> = Rc::new(RefCell::new(Vec::new()));
    let (w, h) = fit_to_window(&canvas)?;
    regenerate(&mut particles.borrow_mut(), w, h);

    // Resize discards the whole field and rebuilds it for the new size.
    let on_resize = {
        let canvas = canvas.clone();
        let particles = particles.clone();
        Closure::wrap(Box::new(move || {
            if let Ok((w, h)) = fit_to_window(&canvas) {
                regenerate(&mut particles.borrow_mut(), w, h);
            }
        }) as Box<dyn FnMut()>)
    };
    dom::window()?
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    // `f` holds the animation-frame closure so it can reschedule itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let width = canvas.width() as f64;
        let height = canvas.height() as f64;
        let mouse = app.mouse.get();

        ctx.clear_rect(0.0, 0.0, width, height);
        ctx.set_fill_style_str(&accent_color());
        for p in particles.borrow_mut().iter_mut() {
            p.step(width, height, mouse);
            ctx.set_global_alpha(p.opacity);
            ctx.begin_path();
            let _ = ctx.arc(p.x, p.y, p.size, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);

        web_sys::window()
            .unwrap()
            .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            .unwrap();
    }) as Box<dyn FnMut()>));

    dom::window()?
        .request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;
    Ok(())
}
