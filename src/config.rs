//! Scene configuration.

use crate::error::{MultilatError, Result};

/// Parameters of an interactive multilateration scene.
///
/// The estimation constants themselves are not configurable; see
/// [`COINCIDENT_EPSILON`](crate::primitives::COINCIDENT_EPSILON) and
/// [`NEIGHBORHOOD_RADIUS`](crate::estimate::NEIGHBORHOOD_RADIUS).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SceneConfig {
    /// Radius given to newly added antennas.
    pub default_radius: f64,
    /// Amount a resize step grows or shrinks the selected antenna. Shrinking
    /// never takes a radius below one step.
    pub resize_step: f64,
    /// Scene width, used as the SVG viewport.
    pub width: f64,
    /// Scene height, used as the SVG viewport.
    pub height: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            default_radius: 25.0,
            resize_step: 5.0,
            width: 640.0,
            height: 640.0,
        }
    }
}

impl SceneConfig {
    /// Checks that every value is finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !(self.default_radius.is_finite() && self.default_radius >= 0.0) {
            return Err(MultilatError::InvalidConfig(
                "default_radius must be finite and non-negative",
            ));
        }
        if !(self.resize_step.is_finite() && self.resize_step > 0.0) {
            return Err(MultilatError::InvalidConfig(
                "resize_step must be finite and positive",
            ));
        }
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !(positive(self.width) && positive(self.height)) {
            return Err(MultilatError::InvalidConfig(
                "scene dimensions must be finite and positive",
            ));
        }
        Ok(())
    }
}
