//! Configuration management for the application.
//!
//! This module handles loading and saving application configuration in TOML
//! format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{DEFAULT_BEAKER_CAPACITY, DEFAULT_GRID_COLUMNS, DEFAULT_SWATCH_COUNT};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Editor defaults configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Capacity of beakers created without a reference beaker
    #[serde(default = "default_capacity")]
    pub default_capacity: usize,
    /// Number of color swatches in the editor swatch bar
    #[serde(default = "default_swatch_count")]
    pub swatch_count: usize,
    /// Maximum beakers per row in the board grid
    #[serde(default = "default_grid_columns")]
    pub grid_columns: usize,
}

fn default_capacity() -> usize {
    DEFAULT_BEAKER_CAPACITY
}

fn default_swatch_count() -> usize {
    DEFAULT_SWATCH_COUNT
}

fn default_grid_columns() -> usize {
    DEFAULT_GRID_COLUMNS
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_capacity: default_capacity(),
            swatch_count: default_swatch_count(),
            grid_columns: default_grid_columns(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/pourlab/config.toml`
/// - macOS: `~/Library/Application Support/pourlab/config.toml`
/// - Windows: `%APPDATA%\pourlab\config.toml`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Editor defaults
    #[serde(default)]
    pub editor: EditorConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("pourlab");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration. Loaded
    /// values are clamped to usable ranges instead of erroring.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let mut config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.clamp();
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Clamps configuration values to usable ranges.
    ///
    /// Every beaker needs at least one slot, the swatch bar at least one
    /// color, and the grid at least one column.
    fn clamp(&mut self) {
        self.editor.default_capacity = self.editor.default_capacity.max(1);
        self.editor.swatch_count = self.editor.swatch_count.max(1);
        self.editor.grid_columns = self.editor.grid_columns.max(1);
    }
}
