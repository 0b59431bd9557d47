use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Result, SiteError};
use crate::nav::{ScrollTrigger, DEFAULT_SCROLLED_THRESHOLD, DEFAULT_SCROLL_DELAY};
use crate::theme::Theme;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub navigation: NavigationConfig,
    pub window: WindowConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: Theme,
}

/// How a cross-page anchor selection waits for the landing page
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollTriggerKind {
    #[default]
    FixedDelay,
    AwaitMount,
}

/// Navigation behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    pub scroll_trigger: ScrollTriggerKind,
    /// Delay before a deferred scroll (fixed-delay trigger only)
    pub scroll_delay_ms: u64,
    /// Vertical offset past which the navbar switches to its scrolled look
    pub scrolled_threshold: f32,
    /// Window width below which the navbar collapses into a menu button
    pub mobile_breakpoint: f32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_trigger: ScrollTriggerKind::FixedDelay,
            scroll_delay_ms: DEFAULT_SCROLL_DELAY.as_millis() as u64,
            scrolled_threshold: DEFAULT_SCROLLED_THRESHOLD,
            mobile_breakpoint: 768.0,
        }
    }
}

impl NavigationConfig {
    pub fn scroll_trigger(&self) -> ScrollTrigger {
        match self.scroll_trigger {
            ScrollTriggerKind::FixedDelay => {
                ScrollTrigger::FixedDelay(Duration::from_millis(self.scroll_delay_ms))
            }
            ScrollTriggerKind::AwaitMount => ScrollTrigger::AwaitMount,
        }
    }
}

/// Initial window size (in points)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

impl SiteConfig {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "hackfest-site")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the user config file, or return defaults if
    /// it is missing or unreadable
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            log::warn!("No config directory; using default configuration");
            return Self::default();
        };
        if !path.exists() {
            log::info!("No config at {}; using defaults", path.display());
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{}; using default configuration", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| SiteError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create a default config file in the user config dir if it doesn't
    /// exist. Returns whether a file was written.
    pub fn create_default() -> Result<bool> {
        let path = Self::config_path().ok_or(SiteError::NoConfigDir)?;
        Self::create_default_at(&path)
    }

    pub fn create_default_at(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        log::info!("Wrote default config to {}", path.display());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.theme.mode, Theme::Dark);
        assert_eq!(config.navigation.scroll_delay_ms, 100);
        assert_eq!(config.navigation.scrolled_threshold, 10.0);
        assert_eq!(
            config.navigation.scroll_trigger(),
            ScrollTrigger::FixedDelay(Duration::from_millis(100))
        );
        assert_eq!(config.window.width, 1280.0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = SiteConfig::from_toml(
            r#"
            [theme]
            mode = "light"

            [navigation]
            scroll_trigger = "await-mount"
            "#,
        )
        .expect("Failed to parse");
        assert_eq!(config.theme.mode, Theme::Light);
        assert_eq!(config.navigation.scroll_trigger(), ScrollTrigger::AwaitMount);
        assert_eq!(config.navigation.mobile_breakpoint, 768.0);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let err = SiteConfig::from_toml("[theme]\nmode = \"sepia\"\n").unwrap_err();
        assert!(matches!(err, SiteError::ConfigParse(_)));
    }

    #[test]
    fn test_config_serialization() {
        let mut config = SiteConfig::default();
        config.navigation.scroll_delay_ms = 120;
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized = SiteConfig::from_toml(&toml_str).expect("Failed to deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("hackfest-site-test-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");
        let mut config = SiteConfig::default();
        config.theme.mode = Theme::Light;

        config.save_to(&path).expect("Failed to save");
        let loaded = SiteConfig::load_from(&path).expect("Failed to load");
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_create_default_keeps_existing_file() {
        let dir = std::env::temp_dir()
            .join(format!("hackfest-site-default-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        assert!(SiteConfig::create_default_at(&path).expect("Failed to create"));
        assert_eq!(SiteConfig::load_from(&path).expect("Failed to load"), SiteConfig::default());

        fs::write(&path, "[theme]\nmode = \"light\"\n").expect("Failed to write");
        assert!(!SiteConfig::create_default_at(&path).expect("Failed to check"));
        let kept = SiteConfig::load_from(&path).expect("Failed to load");
        assert_eq!(kept.theme.mode, Theme::Light);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("hackfest-site-definitely-missing.toml");
        let err = SiteConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, SiteError::Io { .. }));
    }
}
