//! The two-state theme preference.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Value stored in localStorage and mirrored into `data-theme`.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_str(s: &str) -> Option<Theme> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// Toggle-button icon for the current theme: a sun while dark (click
    /// for light), a moon while light.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "ti ti-sun",
            Theme::Light => "ti ti-moon-stars",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn double_toggle_is_identity() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.toggle().toggle(), theme);
            assert_ne!(theme.toggle(), theme);
        }
    }

    #[test]
    fn round_trips_through_storage_string() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_str("solarized"), None);
    }

    #[test]
    fn dark_is_the_default() {
        assert_eq!(Theme::default(), Theme::Dark);
    }
}
