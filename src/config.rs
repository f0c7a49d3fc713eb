//! Extraction settings: tolerances and viewport.
//!
//! Settings can be loaded from a JSON file or constructed programmatically:
//!
//! ```no_run
//! use style_extractor::config::ExtractConfig;
//! use std::path::Path;
//!
//! let config = ExtractConfig::from_json_file(Path::new("extract.json"))?;
//! # Ok::<(), style_extractor::ExtractError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, Result};

/// Difference thresholds for treating raw measurements as the same token.
///
/// Only recorded in the extraction metadata for now: quantization is
/// exact-hex and no stage merges spacing, typography or radius values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToleranceSettings {
    /// RGB difference tolerance
    pub color: f32,
    /// Pixel difference tolerance
    pub spacing: f32,
    /// Font size difference tolerance
    pub typography: f32,
    /// Border radius difference tolerance
    pub border_radius: f32,
}

impl Default for ToleranceSettings {
    fn default() -> Self {
        Self {
            color: 10.0,
            spacing: 5.0,
            typography: 2.0,
            border_radius: 3.0,
        }
    }
}

impl ToleranceSettings {
    /// Every knob must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let knobs = [
            ("color", self.color),
            ("spacing", self.spacing),
            ("typography", self.typography),
            ("borderRadius", self.border_radius),
        ];
        for (name, value) in knobs {
            if !value.is_finite() || value < 0.0 {
                return Err(ExtractError::Config(format!(
                    "{name} tolerance must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Viewport class of the source screenshot. Supplied by the caller.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

/// Everything an extraction run needs besides the image itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    pub tolerances: ToleranceSettings,
    pub viewport: Viewport,
}

impl ExtractConfig {
    /// Load and validate a config file. Missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.tolerances.validate()?;
        Ok(config)
    }
}
