/// Viewer options with TOML file support
///
/// Every section uses `#[serde(default)]`, so a file that only overrides
/// `[spin]` keeps the defaults everywhere else.
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::path::Path;

use crate::error::OptionsError;
use crate::vector::Vector3;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerOptions {
    pub camera: CameraOptions,
    pub control: ControlOptions,
    pub spin: SpinOptions,
}

impl ViewerOptions {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, OptionsError> {
        let options: Self = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject values that would make the camera scale zero, infinite or NaN
    pub fn validate(&self) -> Result<(), OptionsError> {
        require_positive("camera.initial_scale", self.camera.initial_scale)?;
        require_positive("control.drag_zoom_pixels", self.control.drag_zoom_pixels)?;
        require_positive("control.wheel_delta_unit", self.control.wheel_delta_unit)?;
        if !(self.control.wheel_zoom_rate.is_finite() && self.control.wheel_zoom_rate >= 0.0) {
            return Err(OptionsError::OutOfRange {
                name: "control.wheel_zoom_rate",
                expected: "finite and non-negative",
                value: self.control.wheel_zoom_rate,
            });
        }
        if !self.spin.radians_per_frame.is_finite() {
            return Err(OptionsError::OutOfRange {
                name: "spin.radians_per_frame",
                expected: "finite",
                value: self.spin.radians_per_frame,
            });
        }
        Ok(())
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OptionsError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Fails unless `value` is finite and greater than zero
pub fn require_positive(name: &'static str, value: f64) -> Result<(), OptionsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(OptionsError::OutOfRange {
            name,
            expected: "finite and positive",
            value,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Orthographic half extent used before any mesh has been fitted
    pub initial_scale: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self { initial_scale: 1.5 }
    }
}

/// Zoom response of the orbit control
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ControlOptions {
    /// Vertical drag distance (pixels) that doubles or halves the scale
    pub drag_zoom_pixels: f64,
    /// Wheel zoom amount per `wheel_delta_unit` of wheel delta
    pub wheel_zoom_rate: f64,
    pub wheel_delta_unit: f64,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            drag_zoom_pixels: 40.0,
            wheel_zoom_rate: 0.1,
            wheel_delta_unit: 100.0,
        }
    }
}

/// Turntable rotation applied every frame while no drag is active
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpinOptions {
    pub enabled: bool,
    pub axis: [f64; 3],
    pub radians_per_frame: f64,
}

impl SpinOptions {
    pub fn axis(&self) -> Vector3 {
        Vector3::from(self.axis)
    }
}

impl Default for SpinOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            axis: [0.3, 1.0, 0.0],
            radians_per_frame: 0.01 * PI,
        }
    }
}
