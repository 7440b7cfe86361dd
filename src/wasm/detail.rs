//! Project-detail page flow.
//!
//! The page is addressed by either a `project` slug or an `id` index query
//! parameter; both resolve against the same project list with the shared
//! slug function. Anything that fails to resolve lands on the not-found
//! state instead of throwing.

use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;

use crate::markup;
use crate::portfolio::{PortfolioData, Project, ProjectQuery};

use super::{app::App, cursor, dom, loader, modal, nav, particles, theme};

pub async fn run(app: Rc<App>) {
    if let Err(e) = flow(app).await {
        web_sys::console::error_1(&e);
        show_error();
    }
}

async fn flow(app: Rc<App>) -> Result<(), JsValue> {
    let Some(query) = read_query()? else {
        show_error();
        return Ok(());
    };

    let data = match loader::fetch_portfolio().await {
        Ok(data) => data,
        Err(err) => {
            web_sys::console::error_1(&format!("project load failed: {err}").into());
            show_error();
            return Ok(());
        }
    };

    let Some(project) = data.resolve_project(&query) else {
        show_error();
        return Ok(());
    };
    populate(&data, project)?;

    if let Some(spinner) = dom::get("loadingSpinner") {
        dom::set_style(&spinner, "display", "none");
    }
    let main = dom::require("mainContent")?;
    dom::set_style(&main, "display", "block");

    theme::init(app.clone())?;
    particles::init(app.clone())?;
    cursor::init(app);
    nav::init();
    modal::init()?;
    Ok(())
}

/// The slug parameter wins over the index one; an unparsable index reads
/// as "no project specified".
fn read_query() -> Result<Option<ProjectQuery>, JsValue> {
    let search = dom::window()?.location().search()?;
    let params = UrlSearchParams::new_with_str(&search)?;
    if let Some(slug) = params.get("project") {
        return Ok(Some(ProjectQuery::Slug(slug)));
    }
    Ok(params
        .get("id")
        .and_then(|id| id.parse().ok())
        .map(ProjectQuery::Index))
}

fn populate(data: &PortfolioData, project: &Project) -> Result<(), JsValue> {
    let title = format!("{} | {}", project.name, data.personal_info.name);
    dom::set_text("pageTitle", &title);
    dom::document()?.set_title(&title);

    dom::require("projectTitle")?.set_text_content(Some(&project.name));
    dom::set_text("projectSubtitle", &project.short_description);
    dom::set_text("projectDescription", &project.description);

    if let Some(cover) = dom::get("projectCover") {
        cover.set_attribute("src", &project.cover_image)?;
        cover.set_attribute("alt", &format!("{} Cover", project.name))?;
    }

    dom::set_html("projectLinks", &markup::detail_links(&project.links));
    dom::set_html("featuresGrid", &markup::feature_cards(&project.features));
    dom::set_html("techGrid", &markup::tech_chips(&project.technologies_used));
    dom::set_html("projectGallery", &markup::gallery_items(project));
    Ok(())
}

/// Not-found state: spinner gone, error surface shown, content hidden.
fn show_error() {
    if let Some(spinner) = dom::get("loadingSpinner") {
        dom::set_style(&spinner, "display", "none");
    }
    if let Some(error) = dom::get("errorMessage") {
        dom::set_style(&error, "display", "flex");
    }
    if let Some(main) = dom::get("mainContent") {
        dom::set_style(&main, "display", "none");
    }
}
