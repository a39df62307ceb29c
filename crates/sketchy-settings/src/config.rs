//! Editor configuration.
//!
//! Settings are stored in the platform config directory
//! (`<config_dir>/sketchy/settings.toml`) and may also be loaded from any
//! `.json` or `.toml` file.

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use sketchy_core::Color;
use std::path::{Path, PathBuf};

pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;
pub const MIN_STROKE_WIDTH: f64 = 0.0;
pub const MAX_STROKE_WIDTH: f64 = 10.0;

/// Drawing defaults applied when a session starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Fill color for new shapes and stroke color for new curves
    pub default_color: Color,
    /// Stroke width for new curves
    pub default_stroke_width: f64,
    /// Lower bound accepted by the stroke width control
    pub min_stroke_width: f64,
    /// Upper bound accepted by the stroke width control
    pub max_stroke_width: f64,
    /// Maximum number of undoable commands kept; 0 keeps everything
    pub history_limit: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_color: Color::WHITE,
            default_stroke_width: DEFAULT_STROKE_WIDTH,
            min_stroke_width: MIN_STROKE_WIDTH,
            max_stroke_width: MAX_STROKE_WIDTH,
            history_limit: 0,
        }
    }
}

impl EditorSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default settings file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sketchy").join("settings.toml"))
    }

    /// Load settings from file (JSON or TOML, chosen by extension)
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => return Err(SettingsError::UnsupportedFormat(path.display().to_string())),
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Loads `path` when it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save settings to file (JSON or TOML, chosen by extension)
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            _ => return Err(SettingsError::UnsupportedFormat(path.display().to_string())),
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (key, value) in [
            ("default_stroke_width", self.default_stroke_width),
            ("min_stroke_width", self.min_stroke_width),
            ("max_stroke_width", self.max_stroke_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::invalid(
                    key,
                    format!("must be a finite non-negative number, got {value}"),
                ));
            }
        }

        if self.min_stroke_width > self.max_stroke_width {
            return Err(SettingsError::invalid(
                "min_stroke_width",
                format!(
                    "{} is greater than max_stroke_width {}",
                    self.min_stroke_width, self.max_stroke_width
                ),
            ));
        }

        if !(self.min_stroke_width..=self.max_stroke_width).contains(&self.default_stroke_width) {
            return Err(SettingsError::invalid(
                "default_stroke_width",
                format!(
                    "{} is outside {}..={}",
                    self.default_stroke_width, self.min_stroke_width, self.max_stroke_width
                ),
            ));
        }

        Ok(())
    }

    /// Clamps a requested stroke width into the configured range.
    pub fn clamp_stroke_width(&self, width: f64) -> f64 {
        width.clamp(self.min_stroke_width, self.max_stroke_width)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
