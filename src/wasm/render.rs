//! Home-page renderer: populates every placeholder and repeated block from
//! the fetched document.
//!
//! Containers are filled by wholesale child replacement, so rendering is
//! idempotent. Personal info and the project grid are mandatory targets;
//! everything else quietly skips an absent element or an empty list.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::icons;
use crate::markup;
use crate::portfolio::PortfolioData;

use super::{app::App, dom, toast};

pub fn populate(app: &Rc<App>, data: &PortfolioData) -> Result<(), JsValue> {
    let info = &data.personal_info;

    // Fatal if the page skeleton is missing.
    dom::require("mainContent")?;
    dom::require("name")?.set_text_content(Some(&info.name));
    dom::require("title")?.set_text_content(Some(&info.title));

    let profile = dom::require("profileImg")?;
    profile.set_attribute("src", &info.profile_image)?;
    profile.set_attribute("alt", &format!("{} profile photo", info.name))?;

    dom::set_text("projectsNum", &data.projects.len().to_string());
    if let Some(n) = data.experience_num {
        dom::set_text("experienceNum", &n.to_string());
    }
    if let Some(n) = data.customers_num {
        dom::set_text("customersNum", &n.to_string());
    }

    dom::set_text("aboutMe", &info.about_me);
    dom::set_text("location", &info.location);

    let contact = &info.contact;
    dom::set_attr("phone", "href", &contact.tel_href());
    dom::set_text("phone", &contact.phone);
    dom::set_attr("email", "href", &contact.mailto_href());
    dom::set_text("email", &contact.email);
    dom::set_attr("emailCTA", "href", &contact.mailto_href());
    dom::set_attr("whatsappCTA", "href", &contact.whatsapp_href());
    if let Some(cv) = &info.cv_download {
        dom::set_attr("cvDownload", "href", cv);
    }

    if let Some(linkedin) = info
        .social_links
        .iter()
        .find(|l| l.platform == "LinkedIn")
    {
        dom::set_attr("linkedin", "href", &linkedin.url);
        dom::set_text("linkedin", &info.name);
    }

    dom::set_html("socialLinks", &markup::social_links(&info.social_links));

    let categories = icons::categorize(&data.skills.technical_skills);
    dom::set_html("frontendSkills", &markup::skill_chips(&categories.frontend));
    dom::set_html("backendSkills", &markup::skill_chips(&categories.backend));
    dom::set_html("toolsSkills", &markup::skill_chips(&categories.tools));
    wire_skill_chips(app);

    dom::set_html("experienceTimeline", &markup::experience_timeline(&data.experience));
    dom::set_html("educationList", &markup::education_cards(&data.education));

    dom::set_html("projectsGrid", &markup::project_cards(&data.projects));
    wire_project_cards()?;

    Ok(())
}

/// Clicking a skill chip pops a toast naming the skill.
fn wire_skill_chips(app: &Rc<App>) {
    for chip in dom::query_all(".simple-chip") {
        let label = chip
            .query_selector("span")
            .ok()
            .flatten()
            .and_then(|s| s.text_content())
            .unwrap_or_default();
        let app = app.clone();
        let on_click = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            toast::show(&app, &format!("{label} - One of my core technologies! 🚀"));
        }) as Box<dyn FnMut(_)>);
        let _ = chip.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}

/// A click anywhere on a project card (outside its external links) opens
/// the detail page for the card's slug.
fn wire_project_cards() -> Result<(), JsValue> {
    for card in dom::query_all("#projectsGrid .project") {
        let Some(slug) = card.get_attribute("data-slug") else {
            continue;
        };
        let on_click = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            if clicked_inner_link(&e) {
                return;
            }
            if let Some(window) = web_sys::window() {
                let _ = window
                    .location()
                    .set_href(&format!("project-details.html?project={slug}"));
            }
        }) as Box<dyn FnMut(_)>);
        card.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

fn clicked_inner_link(e: &web_sys::MouseEvent) -> bool {
    e.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten())
        .is_some()
}
