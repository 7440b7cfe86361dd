//! End-to-end checks over the pure core: a two-project document rendered
//! to cards, resolved by slug and by index, and pushed through the
//! terminal dispatcher.

use portfolio_wasm::markup;
use portfolio_wasm::portfolio::{PortfolioData, ProjectQuery};
use portfolio_wasm::slug::slugify;
use portfolio_wasm::terminal::{self, Reply};

const TWO_PROJECTS: &str = r#"{
    "personal_info": {
        "name": "Youssef Wael",
        "title": "Flutter Developer",
        "contact": { "email": "dev@example.com", "phone": "+20 155 576 1846" }
    },
    "skills": { "technical_skills": ["Flutter", "Firebase"] },
    "projects": [
        {
            "name": "Lifeline",
            "short_description": "Emergency first-aid companion",
            "cover_image": "assets/lifeline/cover.png"
        },
        {
            "name": "Bank Dash",
            "short_description": "Personal banking dashboard",
            "cover_image": "assets/bankdash/cover.png",
            "media": [
                { "url": "a.png", "type": "screenshot" },
                { "url": "b.mp4", "type": "video" }
            ]
        }
    ]
}"#;

fn load() -> PortfolioData {
    serde_json::from_str(TWO_PROJECTS).expect("sample document parses")
}

#[test]
fn two_cards_render_in_source_order_with_slug_links() {
    let data = load();
    let html = markup::project_cards(&data.projects);

    assert_eq!(html.matches("<article").count(), 2);
    let first = html.find(r#"data-slug="lifeline""#).expect("lifeline card");
    let second = html.find(r#"data-slug="bank-dash""#).expect("bank dash card");
    assert!(first < second, "cards must keep document order");
}

#[test]
fn slug_and_index_addressing_resolve_to_the_same_project() {
    let data = load();
    for (i, project) in data.projects.iter().enumerate() {
        let via_index = data.resolve_project(&ProjectQuery::Index(i)).unwrap();
        let via_slug = data
            .resolve_project(&ProjectQuery::Slug(project.slug()))
            .unwrap();
        assert_eq!(via_index.name, via_slug.name);
    }
    // The raw display name works as a slug query too.
    assert_eq!(
        data.resolve_project(&ProjectQuery::Slug("Bank Dash!".into()))
            .unwrap()
            .name,
        "Bank Dash"
    );
}

#[test]
fn out_of_range_index_is_not_found() {
    let data = load();
    assert!(data.resolve_project(&ProjectQuery::Index(2)).is_none());
    assert!(data
        .resolve_project(&ProjectQuery::Slug("no-such-app".into()))
        .is_none());
}

#[test]
fn generated_links_round_trip_through_lookup() {
    let data = load();
    let html = markup::project_cards(&data.projects);
    // Every slug embedded in the markup must resolve back to a project.
    for project in &data.projects {
        let slug = project.slug();
        assert!(html.contains(&format!(r#"data-slug="{slug}""#)));
        assert_eq!(slugify(&slug), slug, "embedded slug is already normal form");
        assert_eq!(data.project_by_slug(&slug).unwrap().name, project.name);
    }
}

#[test]
fn terminal_surfaces_the_same_document() {
    let data = load();
    assert_eq!(
        terminal::dispatch("projects", &data, 0),
        Some(Reply::Output("Lifeline, Bank Dash".into()))
    );
    assert_eq!(
        terminal::dispatch("skills", &data, 0),
        Some(Reply::Output("Flutter, Firebase".into()))
    );
}

#[test]
fn required_top_level_fields_are_enforced() {
    let missing_projects = r#"{
        "personal_info": {
            "name": "X", "title": "Y",
            "contact": { "email": "a@b.c", "phone": "1" }
        }
    }"#;
    assert!(serde_json::from_str::<PortfolioData>(missing_projects).is_err());

    let missing_info = r#"{ "projects": [] }"#;
    assert!(serde_json::from_str::<PortfolioData>(missing_info).is_err());
}
