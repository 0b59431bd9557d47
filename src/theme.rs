//! Two-valued site theme.
//!
//! The shell owns the current [`Theme`]; the navigation controller flips it
//! through [`ThemeHost`]. Each frame the shell applies [`Theme::visuals`] to
//! the egui context, which is how the flag reaches the whole document.

use eframe::egui;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Dark
    }
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Document-level attribute value.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Glyph shown on the toggle: the theme you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "\u{263E}",
            Self::Dark => "\u{2600}",
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Self::Light => egui::Visuals::light(),
            Self::Dark => egui::Visuals::dark(),
        }
    }

    /// Brand accent (the gold of the logo mark).
    pub fn accent(self) -> egui::Color32 {
        match self {
            Self::Light => egui::Color32::from_rgb(184, 134, 11),
            Self::Dark => egui::Color32::from_rgb(255, 215, 0),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_attr())
    }
}

/// Theme state supplied by the application shell.
pub trait ThemeHost {
    fn theme(&self) -> Theme;
    fn set_theme(&mut self, theme: Theme);
}

impl ThemeHost for Theme {
    fn theme(&self) -> Theme {
        *self
    }

    fn set_theme(&mut self, theme: Theme) {
        *self = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_restores() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggle().toggle(), theme);
            assert_ne!(theme.toggle(), theme);
        }
    }

    #[test]
    fn test_attr_and_icon() {
        assert_eq!(Theme::Light.as_attr(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_ne!(Theme::Light.toggle_icon(), Theme::Dark.toggle_icon());
    }

    #[test]
    fn test_visuals_follow_theme() {
        assert!(Theme::Dark.visuals().dark_mode);
        assert!(!Theme::Light.visuals().dark_mode);
    }
}
