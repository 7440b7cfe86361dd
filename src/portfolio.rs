//! The portfolio document: serde model plus project lookup.
//!
//! Everything is deserialized from one `data.json` fetched per page view.
//! `personal_info` and `projects` are required; every other collection
//! defaults to empty so a sparse document still renders.

use serde::Deserialize;

use crate::slug::slugify;

#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioData {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience_num: Option<u32>,
    #[serde(default)]
    pub customers_num: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub profile_image: String,
    #[serde(default)]
    pub about_me: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub cv_download: Option<String>,
    pub contact: Contact,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
}

impl Contact {
    /// `tel:` link target; whitespace inside the number is dropped.
    pub fn tel_href(&self) -> String {
        let digits: String = self.phone.split_whitespace().collect();
        format!("tel:{digits}")
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// WhatsApp deep link; wa.me accepts digits only.
    pub fn whatsapp_href(&self) -> String {
        let digits: String = self.phone.chars().filter(char::is_ascii_digit).collect();
        format!("https://wa.me/{digits}")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub technical_skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date_range: String,
    #[serde(default)]
    pub description_points: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub date_range: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub technologies_used: Vec<String>,
}

impl Project {
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectLink {
    pub url: String,
    #[serde(rename = "type")]
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaItem {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Screenshot,
    Gif,
    #[serde(other)]
    Other,
}

impl MediaKind {
    /// Gallery items show only still images and gifs; anything else is
    /// excluded from the modal's navigation set.
    pub fn is_image(self) -> bool {
        matches!(self, MediaKind::Screenshot | MediaKind::Gif)
    }

    pub fn overlay_label(self) -> &'static str {
        match self {
            MediaKind::Gif => "Demo",
            _ => "Screenshot",
        }
    }
}

/// How a detail page addresses a project: positional index or name slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectQuery {
    Index(usize),
    Slug(String),
}

impl PortfolioData {
    pub fn project_by_index(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    /// Slug lookup re-slugs the query, so any spelling that normalizes to
    /// the same slug resolves to the same project as the index form.
    pub fn project_by_slug(&self, query: &str) -> Option<&Project> {
        let want = slugify(query);
        self.projects.iter().find(|p| p.slug() == want)
    }

    pub fn resolve_project(&self, query: &ProjectQuery) -> Option<&Project> {
        match query {
            ProjectQuery::Index(i) => self.project_by_index(*i),
            ProjectQuery::Slug(s) => self.project_by_slug(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PortfolioData {
        serde_json::from_str(
            r#"{
                "personal_info": {
                    "name": "Ada Lovelace",
                    "title": "Engine Programmer",
                    "contact": { "email": "ada@example.com", "phone": "+20 155 576 1846" }
                },
                "projects": [
                    { "name": "Lifeline" },
                    { "name": "Bank Dash" }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn optional_collections_default_to_empty() {
        let data = sample();
        assert!(data.skills.technical_skills.is_empty());
        assert!(data.experience.is_empty());
        assert!(data.education.is_empty());
        assert_eq!(data.experience_num, None);
        assert!(data.projects[0].links.is_empty());
        assert!(data.projects[0].media.is_empty());
    }

    #[test]
    fn slug_and_index_lookup_agree() {
        let data = sample();
        let by_index = data.project_by_index(1).unwrap();
        let by_slug = data.project_by_slug("bank-dash").unwrap();
        assert_eq!(by_index.name, by_slug.name);
        // Unnormalized query spelling still resolves.
        assert_eq!(data.project_by_slug("Bank Dash!").unwrap().name, "Bank Dash");
    }

    #[test]
    fn out_of_range_and_unknown_lookups_miss() {
        let data = sample();
        assert!(data.project_by_index(2).is_none());
        assert!(data.project_by_slug("minesweeper").is_none());
        assert!(data
            .resolve_project(&ProjectQuery::Index(99))
            .is_none());
    }

    #[test]
    fn contact_hrefs_normalize_the_number() {
        let contact = sample().personal_info.contact;
        assert_eq!(contact.tel_href(), "tel:+201555761846");
        assert_eq!(contact.mailto_href(), "mailto:ada@example.com");
        assert_eq!(contact.whatsapp_href(), "https://wa.me/201555761846");
    }

    #[test]
    fn media_kind_tolerates_unknown_tags() {
        let item: MediaItem =
            serde_json::from_str(r#"{ "url": "clip.mp4", "type": "video" }"#).unwrap();
        assert_eq!(item.kind, MediaKind::Other);
        assert!(!item.kind.is_image());
        let shot: MediaItem =
            serde_json::from_str(r#"{ "url": "a.png", "type": "screenshot" }"#).unwrap();
        assert!(shot.kind.is_image());
        assert_eq!(MediaKind::Gif.overlay_label(), "Demo");
    }
}
