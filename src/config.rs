use color_eyre::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::navigator::{RELEASE_DELAY, STEP_THRESHOLD, StepSettings};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub navigator: NavigatorConfig,
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Wheel navigation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    pub step_threshold: f64,
    pub cooldown_ms: u64,
    /// Delta reported for one terminal scroll notch
    pub wheel_notch_delta: f64,
    /// Rows occupied by one navigator entry
    pub item_height: u16,
    /// Fraction of the remaining distance covered per frame
    pub scroll_speed: f64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            step_threshold: STEP_THRESHOLD,
            cooldown_ms: RELEASE_DELAY.as_millis() as u64,
            wheel_notch_delta: 20.0,
            item_height: 1,
            scroll_speed: 0.35,
        }
    }
}

impl NavigatorConfig {
    #[must_use]
    pub fn step_settings(&self) -> StepSettings {
        StepSettings {
            step_threshold: self.step_threshold.max(f64::EPSILON),
            cooldown: Duration::from_millis(self.cooldown_ms),
            item_extent: f64::from(self.item_height()),
        }
    }

    #[must_use]
    pub fn item_height(&self) -> u16 {
        self.item_height.max(1)
    }
}

/// Typewriter effect timing for page prompts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub delay_ms: u64,
    pub speed_ms: u64,
    pub cursor_blink_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            delay_ms: 500,
            speed_ms: 50,
            cursor_blink_ms: 530,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Navigator item id shown on startup
    pub start_page: String,
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_page: "whoami".to_string(),
            tick_rate_ms: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter level; `RUST_LOG` takes precedence when set
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from disk or creates default if not found
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    pub fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "termfolio")
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine config directory"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap_or_default();
        let parsed = Config::from_toml(&text).ok();
        assert_eq!(parsed, Some(config));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let parsed = Config::from_toml("[navigator]\ncooldown_ms = 500\n").ok();
        let Some(config) = parsed else {
            panic!("partial config should parse");
        };
        assert_eq!(config.navigator.cooldown_ms, 500);
        assert_eq!(config.navigator.step_threshold, 40.0);
        assert_eq!(config.typewriter, TypewriterConfig::default());
        assert_eq!(config.ui.start_page, "whoami");
    }

    #[test]
    fn test_step_settings_guard_zero_values() {
        let navigator = NavigatorConfig {
            step_threshold: 0.0,
            item_height: 0,
            ..NavigatorConfig::default()
        };
        let settings = navigator.step_settings();
        assert!(settings.step_threshold > 0.0);
        assert_eq!(settings.item_extent, 1.0);
        assert_eq!(settings.cooldown, Duration::from_millis(350));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Config::from_toml("navigator = 3").is_err());
    }
}
