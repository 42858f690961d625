use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid payload slider: {0}")]
    InvalidSlider(String),
}

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Settings read from an optional JSON file; every field has a default.
///
/// ```json
/// {
///   "data_path": "spacex_launch_dash.csv",
///   "title": "SpaceX Launch Dashboard",
///   "payload_slider": { "min": 0, "max": 10000, "step": 500, "mark_every": 2000 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub title: String,
    pub payload_slider: PayloadSliderConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("spacex_launch_dash.csv"),
            title: "SpaceX Launch Dashboard".to_string(),
            payload_slider: PayloadSliderConfig::default(),
        }
    }
}

/// Display bounds of the payload range control, in kg.
///
/// These are independent of the loaded data: the initial selection is seeded
/// from the observed payload min/max even when it falls outside them.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PayloadSliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Spacing of the labelled marks under the sliders.
    pub mark_every: f64,
}

impl Default for PayloadSliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10000.0,
            step: 500.0,
            mark_every: 2000.0,
        }
    }
}

impl PayloadSliderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if ![self.min, self.max, self.step, self.mark_every]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(ConfigError::InvalidSlider(
                "bounds and step must be finite".to_string(),
            ));
        }
        if self.min >= self.max {
            return Err(ConfigError::InvalidSlider(format!(
                "min ({}) must be below max ({})",
                self.min, self.max
            )));
        }
        if self.step <= 0.0 {
            return Err(ConfigError::InvalidSlider(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if self.mark_every <= 0.0 {
            return Err(ConfigError::InvalidSlider(format!(
                "mark_every must be positive, got {}",
                self.mark_every
            )));
        }
        Ok(())
    }

    /// Mark positions from `min` to `max` inclusive, `mark_every` apart.
    pub fn marks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.mark_every).floor() as usize;
        (0..=count)
            .map(|i| self.min + i as f64 * self.mark_every)
            .collect()
    }
}

impl DashboardConfig {
    /// Parse and validate a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = serde_json::from_str(text)?;
        config.payload_slider.validate()?;
        Ok(config)
    }

    /// Load the config at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }
}
