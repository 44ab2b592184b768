//! Configuration file support for scroller-menu.
//!
//! Configuration is loaded from `~/.config/scroller-menu/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! Dimensions are given in density-independent units and converted to pixels
//! with `density`.
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/scroller-menu/config.toml
//! items = ["Brightness", "Contrast", "Saturation", "Warmth"]
//! item_width = 120
//! item_height = 36
//! divider_height = 2
//! density = 1.0
//! text_color = "white"
//! selected_background = "#7CAFC2"
//! debug = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{MenuError, Result};
use crate::log;
use crate::menu::MenuStyle;

const ITEMS_ENV: &str = "SCROLLER_MENU_ITEMS";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Menu labels, top to bottom
    pub items: Vec<String>,

    pub item_width: f32,
    pub item_height: f32,

    /// Gap between two neighbouring items
    pub divider_height: f32,

    /// Pixels per density-independent unit
    pub density: f32,

    pub text_color: Option<String>,
    pub item_background: Option<String>,
    pub selected_background: Option<String>,
    pub panel_background: Option<String>,

    /// Trace every notification to the log file
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            item_width: 120.0,
            item_height: 36.0,
            divider_height: 2.0,
            density: 1.0,
            text_color: None,
            item_background: None,
            selected_background: None,
            panel_background: None,
            debug: false,
        }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        let config = if config_path.exists() {
            match Self::from_path(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    log::log_error(&format!("{}", e));
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.with_env()
    }

    /// Load and validate a specific config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("scroller-menu")
    }

    fn validate(&self) -> Result<()> {
        if self.density <= 0.0 {
            return Err(MenuError::Config(format!(
                "density must be positive, got {}",
                self.density
            )));
        }
        if self.item_height < 0.0 || self.divider_height < 0.0 || self.item_width < 0.0 {
            return Err(MenuError::Config("item dimensions must not be negative".to_string()));
        }
        Ok(())
    }

    /// Apply `SCROLLER_MENU_ITEMS` (comma separated) when set.
    fn with_env(self) -> Self {
        let items = std::env::var(ITEMS_ENV).ok().map(|raw| parse_item_list(&raw));
        self.with_overrides(items, None)
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, items: Option<Vec<String>>, debug: Option<bool>) -> Self {
        if let Some(items) = items {
            self.items = items;
        }
        if let Some(debug) = debug {
            self.debug = debug;
        }
        self
    }

    /// Item labels, falling back to a small sample list.
    pub fn items(&self) -> Vec<String> {
        if self.items.is_empty() {
            ["Volume", "Brightness", "Contrast", "Saturation", "Warmth"]
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.items.clone()
        }
    }

    /// Pixel dimensions and appearance for the control.
    pub fn style(&self) -> MenuStyle {
        MenuStyle {
            item_width: self.item_width * self.density,
            item_height: self.item_height * self.density,
            divider_height: self.divider_height * self.density,
            text_color: self.text_color.clone(),
            item_background: self.item_background.clone(),
            selected_background: self.selected_background.clone(),
            panel_background: self.panel_background.clone(),
        }
    }
}

/// Split a comma separated label list, dropping blanks.
pub fn parse_item_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
