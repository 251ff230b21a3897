//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving the generator defaults
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_DIR_NAME, DEFAULT_1U_SPACING, DEFAULT_EMBOSS_DEPTH, DEFAULT_INITIAL_EXTRUDE,
    DEFAULT_KEYCAP_SIZES, MAX_ROW, MAX_SIZE_CODE, MIN_SIZE_CODE,
};
use crate::models::{default_stem_offsets, Spacing, StemOffset};

/// Keycap sizing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingConfig {
    /// Pitch of one keycap unit
    #[serde(default = "default_spacing")]
    pub spacing_1u: f64,
    /// Vertical pitch, defaults to `spacing_1u`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing_1u_vertical: Option<f64>,
    /// Sizes generated by default, in hundredths of a unit
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,
    /// Number of rows offered for row-qualified generation
    #[serde(default = "default_max_row")]
    pub max_row: u32,
}

fn default_spacing() -> f64 {
    DEFAULT_1U_SPACING
}

fn default_sizes() -> Vec<u32> {
    DEFAULT_KEYCAP_SIZES.to_vec()
}

fn default_max_row() -> u32 {
    MAX_ROW
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            spacing_1u: default_spacing(),
            spacing_1u_vertical: None,
            sizes: default_sizes(),
            max_row: default_max_row(),
        }
    }
}

impl SizingConfig {
    /// Layout spacing derived from the configured pitch.
    #[must_use]
    pub fn spacing(&self) -> Spacing {
        Spacing {
            horizontal: self.spacing_1u,
            vertical: self.spacing_1u_vertical.unwrap_or(self.spacing_1u),
        }
    }

    /// Checks that `row` is one of the `max_row` rows offered (0-based).
    pub fn check_row(&self, row: u32) -> Result<()> {
        if row >= self.max_row {
            anyhow::bail!(
                "Row {row} out of range: rows 0 to {} are available",
                self.max_row.saturating_sub(1)
            );
        }
        Ok(())
    }
}

/// Stabilizer stem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StemConfig {
    /// Stem offsets per size
    #[serde(default = "default_stem_offsets")]
    pub offsets: Vec<StemOffset>,
}

impl Default for StemConfig {
    fn default() -> Self {
        Self {
            offsets: default_stem_offsets(),
        }
    }
}

/// Legend embossing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    /// Distance the legend sketch is extruded before cutting
    #[serde(default = "default_initial_extrude")]
    pub initial_extrude: f64,
    /// Depth of the embossed legend
    #[serde(default = "default_emboss_depth")]
    pub emboss_depth: f64,
}

fn default_initial_extrude() -> f64 {
    DEFAULT_INITIAL_EXTRUDE
}

fn default_emboss_depth() -> f64 {
    DEFAULT_EMBOSS_DEPTH
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            initial_extrude: default_initial_extrude(),
            emboss_depth: default_emboss_depth(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/KeycapGenerator/config.toml`
/// - macOS: `~/Library/Application Support/KeycapGenerator/config.toml`
/// - Windows: `%APPDATA%\KeycapGenerator\config.toml`
///
/// # Validation
///
/// - spacings must be positive
/// - sizes must be non-empty and within 100..=9999
/// - stem offsets must be finite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Sizing defaults
    #[serde(default)]
    pub sizing: SizingConfig,
    /// Stem offsets
    #[serde(default)]
    pub stems: StemConfig,
    /// Legend embossing
    #[serde(default)]
    pub legends: LegendConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .context(format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
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
    pub fn validate(&self) -> Result<()> {
        let spacing = self.sizing.spacing();
        if !(spacing.horizontal > 0.0 && spacing.vertical > 0.0) {
            anyhow::bail!(
                "1U spacing must be positive (horizontal {}, vertical {})",
                spacing.horizontal,
                spacing.vertical
            );
        }

        if self.sizing.sizes.is_empty() {
            anyhow::bail!("At least one keycap size must be configured");
        }

        validate_sizes(&self.sizing.sizes)?;

        for stem in &self.stems.offsets {
            if !stem.offset.is_finite() {
                anyhow::bail!("Stem offset for size {} is not a number", stem.size);
            }
        }

        for (name, value) in [
            ("initial_extrude", self.legends.initial_extrude),
            ("emboss_depth", self.legends.emboss_depth),
        ] {
            if !value.is_finite() {
                anyhow::bail!("Legend setting {name} is not a number");
            }
        }

        Ok(())
    }
}

/// Checks that every size code lies within the generator's range.
pub fn validate_sizes(sizes: &[u32]) -> Result<()> {
    if let Some(size) = sizes
        .iter()
        .find(|size| !(MIN_SIZE_CODE..=MAX_SIZE_CODE).contains(*size))
    {
        anyhow::bail!(
            "Keycap size {size} is out of range ({MIN_SIZE_CODE}..={MAX_SIZE_CODE})"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.sizing.sizes.len(), 10);
        assert_eq!(config.sizing.spacing(), Spacing::uniform(1.9));
        assert_eq!(config.stems.offsets.len(), 6);
    }

    #[test]
    fn test_rows_are_zero_based() {
        let sizing = SizingConfig::default();
        assert!(sizing.check_row(0).is_ok());
        assert!(sizing.check_row(MAX_ROW - 1).is_ok());
        assert!(sizing.check_row(MAX_ROW).is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "[sizing]\nspacing_1u = 1.8\nspacing_1u_vertical = 1.7\nsizes = [100, 200]\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.sizing.sizes, vec![100, 200]);
        assert_eq!(config.sizing.spacing().vertical, 1.7);
        assert_eq!(config.legends, LegendConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.stems.offsets = vec![StemOffset::new(650, 5.2)];
        config.save_to(&path).unwrap();

        assert!(!path.with_extension("toml.tmp").exists());
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::new();
        config.sizing.spacing_1u = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.sizing.sizes = vec![50];
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.sizing.sizes.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[sizing]\nsizes = [10000]\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("out of range"));
    }
}
