// ABOUTME: Configuration management for cvwizard
// Handles UI preferences, theme overrides, and profile store settings

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod theme;

pub use theme::Theme;

const PROFILE_PATH_ENV: &str = "CVWIZARD_PROFILE_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// UI preferences
    #[serde(default)]
    pub ui: UiPreferences,

    /// Profile store settings
    #[serde(default)]
    pub profile: ProfileConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Event loop tick interval in milliseconds (default: 250ms)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Hex color overrides applied on top of the dark palette
    #[serde(default)]
    pub theme: ThemeOverrides,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            theme: ThemeOverrides::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeOverrides {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub background: Option<String>,
    pub paper: Option<String>,
    pub text: Option<String>,
    pub text_secondary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Profile file location; defaults to `<data dir>/profile.json`
    pub path: Option<PathBuf>,

    /// Give up on the existence check after this many seconds (0 disables)
    #[serde(default = "default_check_timeout_secs")]
    pub check_timeout_secs: u64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            path: None,
            check_timeout_secs: default_check_timeout_secs(),
        }
    }
}

impl ProfileConfig {
    pub const fn check_timeout(&self) -> Option<Duration> {
        if self.check_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.check_timeout_secs))
        }
    }
}

const fn default_tick_rate_ms() -> u64 {
    250
}

const fn default_check_timeout_secs() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        // Later paths take precedence
        for path in Self::get_config_paths() {
            if path.exists() {
                config.merge(Self::load_from_path(&path)?);
            }
        }

        if let Ok(path) = std::env::var(PROFILE_PATH_ENV) {
            if !path.is_empty() {
                config.profile.path = Some(PathBuf::from(path));
            }
        }

        Ok(config)
    }

    /// Load a single config file without merging
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn theme(&self) -> Theme {
        Theme::from_overrides(&self.ui.theme)
    }

    /// Get configuration file paths, lowest precedence first
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. User config (~/.cvwizard/config.toml)
        if let Ok(config_dir) = Self::get_user_config_dir() {
            paths.push(config_dir.join("config.toml"));
        }

        // 2. Local project config
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".cvwizard").join("config.toml"));
        }

        paths
    }

    /// Get user configuration directory
    fn get_user_config_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".cvwizard"))
    }

    /// Merge another config into this one
    fn merge(&mut self, other: Self) {
        if other.ui.tick_rate_ms != default_tick_rate_ms() {
            self.ui.tick_rate_ms = other.ui.tick_rate_ms;
        }

        let theme = other.ui.theme;
        let ours = &mut self.ui.theme;
        for (slot, value) in [
            (&mut ours.primary, theme.primary),
            (&mut ours.secondary, theme.secondary),
            (&mut ours.background, theme.background),
            (&mut ours.paper, theme.paper),
            (&mut ours.text, theme.text),
            (&mut ours.text_secondary, theme.text_secondary),
        ] {
            if value.is_some() {
                *slot = value;
            }
        }

        if other.profile.path.is_some() {
            self.profile.path = other.profile.path;
        }
        if other.profile.check_timeout_secs != default_check_timeout_secs() {
            self.profile.check_timeout_secs = other.profile.check_timeout_secs;
        }
    }
}
