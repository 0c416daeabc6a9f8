//! Editor configuration.

use crate::color::SerializableColor;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid value for {field}: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Geometry and colors of the selection overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleStyle {
    /// Edge length of the resize square and diameter of the rotate circle.
    pub handle_size: f64,
    /// Distance from the top edge of the bounds to the rotate handle center.
    pub rotate_offset: f64,
    /// Gap between the bounds and the highlight outline.
    pub highlight_margin: f64,
    /// Stroke width of the highlight outline.
    pub highlight_width: f64,
    /// Radius of the marker drawn at the selection center.
    pub center_marker_radius: f64,
    pub resize_color: SerializableColor,
    pub rotate_color: SerializableColor,
    pub highlight_color: SerializableColor,
    pub center_color: SerializableColor,
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self {
            handle_size: 8.0,
            rotate_offset: 30.0,
            highlight_margin: 5.0,
            highlight_width: 1.0,
            center_marker_radius: 6.0,
            resize_color: SerializableColor::BLUE,
            rotate_color: SerializableColor::ORANGE,
            highlight_color: SerializableColor::RED,
            center_color: SerializableColor::GRAY,
        }
    }
}

/// Top-level editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub handles: HandleStyle,
    /// Distance moved by one arrow-button press, in canvas pixels.
    pub nudge_step: f64,
    /// Angle turned by one rotate-button press, in degrees.
    pub rotate_step_degrees: f64,
    /// Edge length of shapes created from the shape palette.
    pub shape_template_size: f64,
}

impl HandleStyle {
    /// Reject sizes that would break hit testing or painting.
    pub fn validate(&self) -> ConfigResult<()> {
        positive("handles.handle_size", self.handle_size)?;
        finite("handles.rotate_offset", self.rotate_offset)?;
        non_negative("handles.highlight_margin", self.highlight_margin)?;
        non_negative("handles.highlight_width", self.highlight_width)?;
        non_negative("handles.center_marker_radius", self.center_marker_radius)
    }
}

fn finite(field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> ConfigResult<()> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::OutOfRange { field, value });
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> ConfigResult<()> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::OutOfRange { field, value });
    }
    Ok(())
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            handles: HandleStyle::default(),
            nudge_step: 1.0,
            rotate_step_degrees: 1.0,
            shape_template_size: 50.0,
        }
    }
}

impl EditorConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every numeric setting is usable.
    pub fn validate(&self) -> ConfigResult<()> {
        self.handles.validate()?;
        positive("nudge_step", self.nudge_step)?;
        positive("rotate_step_degrees", self.rotate_step_degrees)?;
        positive("shape_template_size", self.shape_template_size)
    }

    /// Serialize the config to JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Rotate step converted to radians.
    pub fn rotate_step(&self) -> f64 {
        self.rotate_step_degrees.to_radians()
    }
}
