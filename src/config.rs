//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving the matrix geometry
//! in TOML format with platform-specific directory resolution.

use crate::models::Geometry;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Matrix geometry settings.
///
/// Missing fields fall back to the controller defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Number of matrix rows
    pub rows: usize,
    /// Number of matrix columns
    pub cols: usize,
    /// Maximum number of layers
    pub max_layers: usize,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        let geometry = Geometry::default();
        Self {
            rows: geometry.rows,
            cols: geometry.cols,
            max_layers: geometry.max_layers,
        }
    }
}

impl From<GeometryConfig> for Geometry {
    fn from(config: GeometryConfig) -> Self {
        Self::new(config.rows, config.cols, config.max_layers)
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Key matrix dimensions
    #[serde(default)]
    pub geometry: GeometryConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/keymatrix/`
    /// - macOS: `~/Library/Application Support/keymatrix/`
    /// - Windows: `%APPDATA%\keymatrix\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("keymatrix");

        Ok(config_dir)
    }

    /// Gets the full path to the default config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to `path` using atomic write.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .context(format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - rows, cols and max_layers are non-zero
    /// - max_layers fits the 16-bit layer count header
    pub fn validate(&self) -> Result<()> {
        let geometry = &self.geometry;
        if geometry.rows == 0 || geometry.cols == 0 {
            anyhow::bail!(
                "Matrix must have at least one row and one column (got {}x{})",
                geometry.rows,
                geometry.cols
            );
        }
        if geometry.max_layers == 0 {
            anyhow::bail!("max_layers must be at least 1");
        }
        if geometry.max_layers > usize::from(u16::MAX) {
            anyhow::bail!(
                "max_layers cannot exceed {} (got {})",
                u16::MAX,
                geometry.max_layers
            );
        }
        Ok(())
    }

    /// The matrix geometry described by this configuration.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry.into()
    }
}
