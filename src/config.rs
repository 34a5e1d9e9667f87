//! Configuration management.
//!
//! Loads and validates the TOML config file, generating a commented template
//! on first run. `ToolboxOptions` enumerates exactly the options the toolbox
//! components consume; it is injected at construction instead of being read
//! from an ambient theme singleton.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_GENERATED, INVERTED_FADE_MULTIPLIER, SEARCH_DEBOUNCE_MS};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub toolbox: ToolboxOptions,
    pub logging: LoggingConfig,
}

/// Demo surface configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Toolbox pane width in columns
    pub toolbox_width: u16,
}

/// Everything the toolbox components read about theming and behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolboxOptions {
    /// Rows take their category color as background.
    pub inverted: bool,
    /// Rows take their category color as foreground.
    pub colored: bool,
    /// Fade multiplier for hovered/selected backgrounds in inverted mode.
    pub inverted_fade: f32,
    /// Right-to-left layout.
    pub rtl: bool,
    /// Staggered entrance animation on first show.
    pub animate: bool,
    /// Show the search box above the tree.
    pub show_search_box: bool,
    /// Trailing-edge debounce window for search input.
    pub search_debounce_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write a log file under the platform cache directory.
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            toolbox_width: 32,
        }
    }
}

impl Default for ToolboxOptions {
    fn default() -> Self {
        Self {
            inverted: false,
            colored: true,
            inverted_fade: INVERTED_FADE_MULTIPLIER,
            rtl: false,
            animate: true,
            show_search_box: true,
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
        }
    }
}

impl Config {
    /// Load configuration from the default location, generating a commented
    /// template first if no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            Self::write_template(&path)?;
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.toolbox.inverted_fade),
            "toolbox.inverted_fade must be within [0, 1], got {}",
            self.toolbox.inverted_fade
        );
        anyhow::ensure!(
            self.ui.toolbox_width >= 16,
            "ui.toolbox_width must be at least 16 columns"
        );
        Ok(())
    }

    fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("no platform config directory")?;
        Ok(base.join("blockpalette").join("config.toml"))
    }

    fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }
        std::fs::write(path, CONFIG_GENERATED)
            .with_context(|| format!("writing config template {}", path.display()))?;
        log::info!("generated default config at {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.toolbox.search_debounce_ms, 300);
        assert!(config.toolbox.show_search_box);
    }

    #[test]
    fn test_generated_template_parses_to_defaults() {
        let config: Config = toml::from_str(CONFIG_GENERATED).unwrap();
        assert!(!config.toolbox.inverted);
        assert!(config.ui.mouse_enabled);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[toolbox]\ninverted = true\n").unwrap();
        assert!(config.toolbox.inverted);
        assert_eq!(config.toolbox.search_debounce_ms, 300);
        assert_eq!(config.ui.toolbox_width, 32);
    }

    #[test]
    fn test_out_of_range_fade_is_rejected() {
        let config: Config = toml::from_str("[toolbox]\ninverted_fade = 2.5\n").unwrap();
        assert!(config.validate().is_err());
    }
}
