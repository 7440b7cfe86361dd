//! HTML builders for every repeated block on both pages.
//!
//! Each builder turns a slice of the portfolio document into a markup
//! string; callers replace a container's children with the result, so a
//! second invocation never accumulates. Every interpolated value runs
//! through [`escape::html`], URLs included.

use std::fmt::Write;

use crate::escape;
use crate::icons;
use crate::portfolio::{Education, Experience, MediaKind, Project, ProjectLink, SocialLink};
use crate::terminal::PROMPT;

/// Social icon links for the hero section.
pub fn social_links(links: &[SocialLink]) -> String {
    let mut out = String::new();
    for link in links {
        let _ = write!(
            out,
            concat!(
                r#"<a href="{url}" target="_blank" rel="noopener">"#,
                r#"<i class="ti ti-brand-{brand}"></i><span>{platform}</span></a>"#
            ),
            url = escape::html(&link.url),
            brand = escape::html(&link.platform.to_lowercase()),
            platform = escape::html(&link.platform),
        );
    }
    out
}

/// One skill chip with its best-effort icon; the proficiency estimate is
/// exposed as a tooltip.
pub fn skill_chip(skill: &str) -> String {
    let proficiency = icons::proficiency(skill);
    format!(
        concat!(
            r#"<div class="simple-chip" title="{level} · {proficiency}%">"#,
            r#"<div class="simple-chip__icon"><i class="{icon}"></i></div>"#,
            r#"<span>{name}</span></div>"#
        ),
        level = icons::level_label(proficiency),
        proficiency = proficiency,
        icon = icons::skill_icon(skill),
        name = escape::html(skill),
    )
}

pub fn skill_chips(skills: &[String]) -> String {
    skills.iter().map(|s| skill_chip(s)).collect()
}

pub fn experience_timeline(entries: &[Experience]) -> String {
    let mut out = String::new();
    for exp in entries {
        let points = if exp.description_points.is_empty() {
            String::new()
        } else {
            let items: String = exp
                .description_points
                .iter()
                .map(|d| format!("<li>{}</li>", escape::html(d)))
                .collect();
            format!("<ul>{items}</ul>")
        };
        let _ = write!(
            out,
            concat!(
                r#"<div class="timeline-item"><span class="timeline-dot"></span>"#,
                r#"<div class="timeline-card"><h4>{title}</h4>"#,
                r#"<div class="meta">{company} • {location} • {dates}</div>{points}</div></div>"#
            ),
            title = escape::html(&exp.title),
            company = escape::html(&exp.company),
            location = escape::html(&exp.location),
            dates = escape::html(&exp.date_range),
            points = points,
        );
    }
    out
}

pub fn education_cards(entries: &[Education]) -> String {
    let mut out = String::new();
    for ed in entries {
        let _ = write!(
            out,
            concat!(
                r#"<div class="edu-card"><h4>{degree}</h4>"#,
                r#"<div class="meta">{institution} • {dates}</div></div>"#
            ),
            degree = escape::html(&ed.degree),
            institution = escape::html(&ed.institution),
            dates = escape::html(&ed.date_range),
        );
    }
    out
}

/// Home-page project cards. Each card carries its slug in `data-slug`; the
/// renderer wires a click on the card to the detail page for that slug.
pub fn project_cards(projects: &[Project]) -> String {
    let mut out = String::new();
    for project in projects {
        let links: String = project
            .links
            .iter()
            .map(|l| {
                format!(
                    concat!(
                        r#"<a class="link" href="{url}" target="_blank" rel="noopener">"#,
                        r#"<i class="ti ti-external-link"></i><span>{label}</span></a>"#
                    ),
                    url = escape::html(&l.url),
                    label = escape::html(&l.label),
                )
            })
            .collect();
        let _ = write!(
            out,
            concat!(
                r#"<article class="project" data-slug="{slug}">"#,
                r#"<div class="project__cover"><img src="{cover}" alt="{name} cover" loading="lazy" /></div>"#,
                r#"<div class="project__body"><h3 class="project__title">{name}</h3>"#,
                r#"<div class="project__meta">{blurb}</div>"#,
                r#"<div class="links">{links}</div></div></article>"#
            ),
            slug = escape::html(&project.slug()),
            cover = escape::html(&project.cover_image),
            name = escape::html(&project.name),
            blurb = escape::html(&project.short_description),
            links = links,
        );
    }
    out
}

/// Detail-page link buttons; the first link is styled as the primary one.
pub fn detail_links(links: &[ProjectLink]) -> String {
    let mut out = String::new();
    for (i, link) in links.iter().enumerate() {
        let _ = write!(
            out,
            concat!(
                r#"<a class="project-link{primary}" href="{url}" target="_blank" rel="noopener noreferrer">"#,
                r#"<i class="{icon}"></i><span>{label}</span></a>"#
            ),
            primary = if i == 0 { " primary" } else { "" },
            url = escape::html(&link.url),
            icon = icons::link_icon(&link.label),
            label = escape::html(&link.label),
        );
    }
    out
}

pub fn feature_cards(features: &[String]) -> String {
    let mut out = String::new();
    for feature in features {
        let _ = write!(
            out,
            concat!(
                r#"<div class="feature-card"><h3><i class="{icon}"></i>{name}</h3>"#,
                r#"<p>Advanced feature providing enhanced user experience and functionality.</p></div>"#
            ),
            icon = icons::feature_icon(feature),
            name = escape::html(feature),
        );
    }
    out
}

pub fn tech_chips(technologies: &[String]) -> String {
    technologies
        .iter()
        .map(|t| format!(r#"<div class="tech-chip">{}</div>"#, escape::html(t)))
        .collect()
}

fn gallery_item(src: &str, alt: &str, overlay: &str) -> String {
    format!(
        concat!(
            r#"<div class="gallery-item"><img src="{src}" alt="{alt}" loading="lazy" />"#,
            r#"<div class="gallery-overlay"><div class="gallery-type">{overlay}</div></div></div>"#
        ),
        src = escape::html(src),
        alt = escape::html(alt),
        overlay = escape::html(overlay),
    )
}

/// Detail-page gallery. Only image media become items; a project with no
/// image media falls back to a single item showing its cover.
pub fn gallery_items(project: &Project) -> String {
    let items: String = project
        .media
        .iter()
        .filter(|m| m.kind.is_image())
        .map(|m| {
            gallery_item(
                &m.url,
                &format!("{} {}", project.name, m.kind.overlay_label().to_lowercase()),
                m.kind.overlay_label(),
            )
        })
        .collect();
    if items.is_empty() {
        gallery_item(&project.cover_image, &format!("{} Cover", project.name), "Cover")
    } else {
        items
    }
}

// Terminal transcript pieces.

pub fn terminal_output(text: &str) -> String {
    format!(r#"<div class="terminal-output">{}</div>"#, escape::html(text))
}

pub fn terminal_input_line() -> String {
    format!(
        concat!(
            r#"<div class="terminal-input-line"><span class="prompt">{prompt}</span>"#,
            r#"<input type="text" id="terminalInput" class="terminal-input" placeholder="Type a command..." /></div>"#
        ),
        prompt = PROMPT,
    )
}

/// Transcript after `clear`: the echoed command plus one empty input line.
pub fn terminal_cleared() -> String {
    format!(
        concat!(
            r#"<div class="terminal-line"><span class="prompt">{prompt}</span>"#,
            r#"<span class="command">clear</span></div>{input}"#
        ),
        prompt = PROMPT,
        input = terminal_input_line(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::PortfolioData;

    fn two_projects() -> PortfolioData {
        serde_json::from_str(
            r#"{
                "personal_info": {
                    "name": "Ada Lovelace",
                    "title": "Engine Programmer",
                    "contact": { "email": "a@b.c", "phone": "+1 555" }
                },
                "projects": [
                    {
                        "name": "Lifeline",
                        "short_description": "Emergency guide",
                        "cover_image": "img/lifeline.png",
                        "links": [ { "url": "https://example.com", "type": "GitHub" } ]
                    },
                    {
                        "name": "Bank Dash",
                        "cover_image": "img/bank.png",
                        "media": [
                            { "url": "shot.png", "type": "screenshot" },
                            { "url": "demo.gif", "type": "gif" },
                            { "url": "clip.mp4", "type": "video" }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn cards_render_in_source_order_with_slugs() {
        let data = two_projects();
        let html = project_cards(&data.projects);
        assert_eq!(html.matches("<article").count(), 2);
        let lifeline = html.find(r#"data-slug="lifeline""#).unwrap();
        let bank = html.find(r#"data-slug="bank-dash""#).unwrap();
        assert!(lifeline < bank);
        assert!(html.contains("<span>GitHub</span>"));
    }

    #[test]
    fn text_and_urls_are_both_escaped() {
        let data: PortfolioData = serde_json::from_str(
            r#"{
                "personal_info": {
                    "name": "X", "title": "Y",
                    "contact": { "email": "a@b.c", "phone": "1" },
                    "social_links": [
                        { "platform": "Git<b>Hub", "url": "https://x.test/?a=1&b=\"2\"" }
                    ]
                },
                "projects": []
            }"#,
        )
        .unwrap();
        let html = social_links(&data.personal_info.social_links);
        assert!(html.contains("Git&lt;b&gt;Hub"));
        assert!(html.contains("https://x.test/?a=1&amp;b=&quot;2&quot;"));
        assert!(!html.contains(r#"b="2""#));
    }

    #[test]
    fn gallery_excludes_video_and_labels_gifs() {
        let data = two_projects();
        let html = gallery_items(&data.projects[1]);
        assert_eq!(html.matches("gallery-item").count(), 2);
        assert!(html.contains("demo.gif"));
        assert!(html.contains(">Demo<"));
        assert!(!html.contains("clip.mp4"));
    }

    #[test]
    fn gallery_falls_back_to_cover() {
        let data = two_projects();
        let html = gallery_items(&data.projects[0]);
        assert_eq!(html.matches("gallery-item").count(), 1);
        assert!(html.contains("img/lifeline.png"));
        assert!(html.contains(">Cover<"));
    }

    #[test]
    fn first_detail_link_is_primary() {
        let links: Vec<crate::portfolio::ProjectLink> = serde_json::from_str(
            r#"[
                { "url": "https://a.test", "type": "Google Play" },
                { "url": "https://b.test", "type": "GitHub" }
            ]"#,
        )
        .unwrap();
        let html = detail_links(&links);
        assert_eq!(html.matches("project-link primary").count(), 1);
        assert!(html.find("primary").unwrap() < html.find("ti-brand-github").unwrap());
        assert!(html.contains("ti ti-brand-google-play"));
    }

    #[test]
    fn cleared_transcript_has_exactly_one_input_line() {
        let html = terminal_cleared();
        assert_eq!(html.matches("terminal-input-line").count(), 1);
        assert_eq!(html.matches("<input").count(), 1);
        assert!(html.starts_with(r#"<div class="terminal-line">"#));
    }

    #[test]
    fn empty_slices_render_nothing() {
        assert!(experience_timeline(&[]).is_empty());
        assert!(education_cards(&[]).is_empty());
        assert!(project_cards(&[]).is_empty());
        assert!(tech_chips(&[]).is_empty());
    }
}
