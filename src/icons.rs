//! Keyword-to-icon and keyword-to-metadata lookup tables.
//!
//! Every table is an ordered slice of `(keyword, value)` pairs. Lookup tests
//! each keyword as a case-insensitive substring of the input label and
//! returns the first match in declaration order; declaration order is the
//! tie-break rule when a label matches more than one keyword. Labels that
//! match nothing get a fixed default.

/// First `(keyword, value)` pair whose keyword occurs in `label`
/// (case-insensitive substring), in declaration order.
fn first_match<'a, T: Copy>(table: &'a [(&'a str, T)], label: &str) -> Option<T> {
    let label = label.to_lowercase();
    table
        .iter()
        .find(|(key, _)| label.contains(&key.to_lowercase()))
        .map(|&(_, value)| value)
}

/// Project-link label → Tabler icon class.
const LINK_ICONS: &[(&str, &str)] = &[
    ("GitHub", "ti ti-brand-github"),
    ("Google Play", "ti ti-brand-google-play"),
    ("App Store", "ti ti-brand-apple"),
    ("Google Drive", "ti ti-brand-google-drive"),
    ("Live Demo", "ti ti-external-link"),
    ("Website", "ti ti-world"),
];

pub fn link_icon(label: &str) -> &'static str {
    first_match(LINK_ICONS, label).unwrap_or("ti ti-external-link")
}

/// Project-feature label → Tabler icon class.
const FEATURE_ICONS: &[(&str, &str)] = &[
    ("High-quality video courses", "ti ti-video"),
    ("Secure authentication", "ti ti-shield-check"),
    ("Advanced video streaming", "ti ti-player-play"),
    ("Exams & assessments", "ti ti-clipboard-check"),
    ("Transaction management", "ti ti-credit-card"),
    ("Favorites & personalization", "ti ti-heart"),
    ("Quran Recitation", "ti ti-book-2"),
    ("Hadith Collections", "ti ti-books"),
    ("Azkar", "ti ti-rosette"),
    ("Qibla Direction", "ti ti-compass"),
    ("Zakat Calculator", "ti ti-calculator"),
    ("Custom-built Islamic Chatbot", "ti ti-message-chatbot"),
    ("Light & Dark Mode Support", "ti ti-moon-stars"),
    ("Speech-to-text exercises", "ti ti-microphone"),
    ("Friendly text-to-speech output", "ti ti-volume"),
    ("Handwriting practice", "ti ti-writing"),
    ("Lottie animations", "ti ti-player-play"),
    ("Firebase-synced content", "ti ti-cloud"),
    ("AI-powered adaptive learning", "ti ti-brain"),
    ("Interactive games", "ti ti-device-gamepad-2"),
    ("Bilingual support", "ti ti-language"),
    ("Disease search", "ti ti-search"),
    ("Emergency case guides", "ti ti-medical-cross"),
    ("Built-in emergency contacts", "ti ti-phone"),
    ("Hospital locator", "ti ti-map-pin"),
    ("First aid videos", "ti ti-video"),
    ("Daily health tips", "ti ti-bulb"),
    ("Medication tracking", "ti ti-pill"),
    ("Appointment reminders", "ti ti-calendar"),
    ("Local notifications", "ti ti-bell"),
    ("User profile management", "ti ti-user"),
    ("Account overview", "ti ti-chart-pie"),
    ("Transaction history", "ti ti-history"),
    ("Money transfers", "ti ti-arrows-exchange"),
    ("Bill payments", "ti ti-receipt"),
    ("Financial analytics", "ti ti-chart-line"),
    ("Responsive design", "ti ti-device-mobile"),
];

pub fn feature_icon(label: &str) -> &'static str {
    first_match(FEATURE_ICONS, label).unwrap_or("ti ti-star")
}

/// Skill label → Tabler icon class.
const SKILL_ICONS: &[(&str, &str)] = &[
    ("Flutter", "ti ti-brand-flutter"),
    ("Dart", "ti ti-code"),
    ("Firebase", "ti ti-flame"),
    ("Bloc", "ti ti-layers-intersect"),
    ("Provider", "ti ti-share"),
    ("Riverpod", "ti ti-git-fork"),
    ("REST", "ti ti-api"),
    ("SQLite", "ti ti-database"),
    ("Hive", "ti ti-archive"),
    ("GoRouter", "ti ti-route"),
    ("Architecture", "ti ti-building-arch"),
    ("MVVM", "ti ti-hierarchy-3"),
    ("Clean", "ti ti-wash"),
    ("OOP", "ti ti-circles-relation"),
    ("SOLID", "ti ti-shield-check"),
    ("Git", "ti ti-brand-git"),
    ("Testing", "ti ti-bug"),
    ("UI", "ti ti-palette"),
    ("Widget", "ti ti-components"),
    ("API", "ti ti-plug"),
];

pub fn skill_icon(label: &str) -> &'static str {
    first_match(SKILL_ICONS, label).unwrap_or("ti ti-code")
}

/// Skill label → proficiency percentage.
const PROFICIENCY: &[(&str, u8)] = &[
    ("Flutter", 95),
    ("Dart", 92),
    ("Firebase", 88),
    ("Bloc", 85),
    ("Provider", 82),
    ("Riverpod", 88),
    ("REST", 86),
    ("SQLite", 78),
    ("Hive", 80),
    ("GoRouter", 82),
    ("Architecture", 82),
    ("MVVM", 84),
    ("Clean", 86),
    ("OOP", 88),
    ("SOLID", 84),
    ("Git", 85),
    ("Testing", 76),
    ("UI", 86),
    ("Widget", 84),
    ("API", 80),
];

pub const DEFAULT_PROFICIENCY: u8 = 75;

pub fn proficiency(label: &str) -> u8 {
    first_match(PROFICIENCY, label).unwrap_or(DEFAULT_PROFICIENCY)
}

/// Proficiency percentage → level label.
pub fn level_label(proficiency: u8) -> &'static str {
    match proficiency {
        90.. => "Expert",
        80.. => "Advanced",
        70.. => "Intermediate",
        _ => "Beginner",
    }
}

/// Skill categories in display order. A skill lands in the first category
/// with a matching keyword; skills matching nothing fall back to tools.
const FRONTEND_KEYWORDS: &[&str] = &["Flutter", "Dart", "UI", "Widget", "Responsive", "Custom"];
const BACKEND_KEYWORDS: &[&str] = &["Firebase", "REST", "API", "SQLite", "Hive", "Database"];
const TOOLS_KEYWORDS: &[&str] = &[
    "Bloc",
    "Provider",
    "Riverpod",
    "Git",
    "Architecture",
    "MVVM",
    "Clean",
    "OOP",
    "SOLID",
    "Testing",
    "Debug",
];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SkillCategories {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub tools: Vec<String>,
}

pub fn categorize(skills: &[String]) -> SkillCategories {
    let mut out = SkillCategories::default();
    for skill in skills {
        let lowered = skill.to_lowercase();
        let matches =
            |keys: &[&str]| keys.iter().any(|k| lowered.contains(&k.to_lowercase()));
        if matches(FRONTEND_KEYWORDS) {
            out.frontend.push(skill.clone());
        } else if matches(BACKEND_KEYWORDS) {
            out.backend.push(skill.clone());
        } else {
            out.tools.push(skill.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earlier_keyword_wins_on_double_match() {
        // "Flutter UI Design" matches both "Flutter" and "UI"; Flutter is
        // declared first so its icon wins.
        assert_eq!(skill_icon("Flutter UI Design"), "ti ti-brand-flutter");
        assert_eq!(proficiency("Flutter UI Design"), 95);
    }

    #[test]
    fn lookup_is_case_insensitive_substring() {
        assert_eq!(link_icon("github repository"), "ti ti-brand-github");
        assert_eq!(feature_icon("built-in EMERGENCY CONTACTS list"), "ti ti-phone");
    }

    #[test]
    fn unmatched_labels_get_fixed_defaults() {
        assert_eq!(link_icon("Press Kit"), "ti ti-external-link");
        assert_eq!(feature_icon("Quantum entanglement"), "ti ti-star");
        assert_eq!(skill_icon("Underwater basket weaving"), "ti ti-code");
        assert_eq!(proficiency("Underwater basket weaving"), DEFAULT_PROFICIENCY);
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(level_label(95), "Expert");
        assert_eq!(level_label(90), "Expert");
        assert_eq!(level_label(85), "Advanced");
        assert_eq!(level_label(75), "Intermediate");
        assert_eq!(level_label(60), "Beginner");
    }

    #[test]
    fn categorization_prefers_earlier_category() {
        let skills = vec![
            "Flutter".to_string(),
            "Firebase Auth".to_string(),
            "Clean Architecture".to_string(),
            "Interpretive Dance".to_string(),
        ];
        let cats = categorize(&skills);
        assert_eq!(cats.frontend, vec!["Flutter"]);
        assert_eq!(cats.backend, vec!["Firebase Auth"]);
        // "Clean Architecture" matches only tools keywords; the unknown
        // skill falls back to tools as well.
        assert_eq!(cats.tools, vec!["Clean Architecture", "Interpretive Dance"]);
    }
}
