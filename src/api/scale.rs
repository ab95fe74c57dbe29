//! Marker scale heuristic
//!
//! Kept apart from the pose: scale only affects how large the marker is drawn,
//! never where it is placed.

use serde::{Deserialize, Serialize};

/// Inverse-distance scale parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    /// Distance at which the unclamped scale is 1.0 (m)
    pub reference_distance_m: f64,
    /// Lower clamp bound
    pub min_scale: f64,
    /// Upper clamp bound
    pub max_scale: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            reference_distance_m: 1000.0,
            min_scale: 1.5,
            max_scale: 3.0,
        }
    }
}

impl ScaleConfig {
    /// Uniform marker scale for a target `distance_m` away.
    ///
    /// `reference / distance` clamped to `[min_scale, max_scale]`; a zero
    /// distance yields `max_scale`.
    pub fn scale_for(&self, distance_m: f64) -> f64 {
        (self.reference_distance_m / distance_m)
            .max(self.min_scale)
            .min(self.max_scale)
    }
}

/// `clamp(1000 / distance, 1.5, 3.0)`
pub fn marker_scale(distance_m: f64) -> f64 {
    ScaleConfig::default().scale_for(distance_m)
}
