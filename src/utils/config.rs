use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::algorithms::geodesic::DistanceModel;
use crate::algorithms::pose::GeodesicPoseTransform;
use crate::api::scale::ScaleConfig;

/// Placement configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Model used for observer-to-target distance
    pub distance_model: DistanceModel,
    /// Marker scale heuristic
    pub scale: ScaleConfig,
    /// Reject out-of-range coordinates at the session boundary
    pub validate_coordinates: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            distance_model: DistanceModel::Haversine,
            scale: ScaleConfig::default(),
            validate_coordinates: true,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Invalid parameter value
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter { parameter: String, value: String, reason: String },
    /// Configuration file I/O error
    #[error("I/O error: {message}")]
    Io { message: String },
    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl PlacementConfig {
    /// Load and validate configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config: PlacementConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Serialization {
                message: format!("Failed to parse config file '{}': {}", path_str, e),
            })?;

        config.validate()?;
        info!(path = %path_str, model = ?config.distance_model, "loaded placement config");
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&path, content).map_err(|e| ConfigError::Io {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })
    }

    /// Check parameter ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scale = &self.scale;

        if !(scale.reference_distance_m.is_finite() && scale.reference_distance_m > 0.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "scale.reference_distance_m".to_string(),
                value: scale.reference_distance_m.to_string(),
                reason: "must be a positive distance".to_string(),
            });
        }

        if !(scale.min_scale.is_finite() && scale.min_scale > 0.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "scale.min_scale".to_string(),
                value: scale.min_scale.to_string(),
                reason: "must be positive".to_string(),
            });
        }

        if !scale.max_scale.is_finite() || scale.max_scale < scale.min_scale {
            return Err(ConfigError::InvalidParameter {
                parameter: "scale.max_scale".to_string(),
                value: scale.max_scale.to_string(),
                reason: format!("must be at least min_scale ({})", scale.min_scale),
            });
        }

        Ok(())
    }

    /// Pose transform configured with this distance model
    pub fn pose_transform(&self) -> GeodesicPoseTransform {
        GeodesicPoseTransform::with_distance_model(self.distance_model)
    }
}
