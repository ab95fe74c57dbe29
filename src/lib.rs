//! Geodesic AR Placement
//!
//! Converts an observer and a target coordinate into a 3-D pose inside an
//! augmented-reality anchor frame aligned to gravity and compass heading, so a
//! marker can be drawn where the target lies.

pub mod core;
pub mod algorithms;
pub mod api;
pub mod session;
pub mod validation;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{GeoPoint, EARTH_MEAN_RADIUS_M};
pub use algorithms::{
    bearing, compute_pose, compute_pose_from_anchor, distance, rotation_about_vertical,
    DistanceModel, GeodesicPoseTransform, Pose3D,
};
pub use api::{marker_scale, AnchorPosition, Placement, ScaleConfig};
pub use session::{
    AuthorizationAction, AuthorizationStatus, PlacementSession, SessionError, TrackingAction,
    TrackingConfiguration, TrackingEvent,
};
pub use validation::{CoordinateValidator, GeoError};
pub use utils::{ConfigError, PlacementConfig};
