//! Marker placement output
//!
//! A `Placement` is what a renderer consumes: the anchor-frame position of the
//! marker and the uniform scale to draw it at.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::algorithms::pose::{GeodesicPoseTransform, Pose3D};
use crate::api::scale::ScaleConfig;
use crate::core::GeoPoint;

/// Anchor-frame position in meters (+X east, +Y up, −Z north)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Vector3<f64>> for AnchorPosition {
    fn from(v: Vector3<f64>) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

impl From<AnchorPosition> for Vector3<f64> {
    fn from(p: AnchorPosition) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

/// Renderable marker placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub observer: GeoPoint,
    pub target: GeoPoint,
    pub position: AnchorPosition,
    /// Uniform scale applied on all three axes
    pub scale: f64,
    pub distance_m: f64,
    pub bearing_deg: f64,
}

impl Placement {
    /// Build a placement from an already computed pose
    pub fn from_pose(observer: GeoPoint, target: GeoPoint, pose: &Pose3D, scale: &ScaleConfig) -> Self {
        Self {
            observer,
            target,
            position: pose.position().into(),
            scale: scale.scale_for(pose.distance),
            distance_m: pose.distance,
            bearing_deg: pose.bearing.to_degrees(),
        }
    }

    /// Compute the pose and scale for an (observer, target) pair
    pub fn compute(
        transform: &GeodesicPoseTransform,
        scale: &ScaleConfig,
        observer: GeoPoint,
        target: GeoPoint,
    ) -> Self {
        let pose = transform.compute(&observer, &target);
        Self::from_pose(observer, target, &pose, scale)
    }

    /// Scale as a per-axis vector, for scene graphs that take one
    pub fn scale_vector(&self) -> Vector3<f64> {
        Vector3::repeat(self.scale)
    }

    /// Serialize to JSON
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_placement_due_north() {
        let observer = GeoPoint::new(0.0, 0.0);
        let target = GeoPoint::new(0.001, 0.0);
        let placement = Placement::compute(
            &GeodesicPoseTransform::new(),
            &ScaleConfig::default(),
            observer,
            target,
        );

        assert_relative_eq!(placement.position.z, -placement.distance_m, max_relative = 1e-12);
        assert_eq!(placement.position.y, 0.0);
        // ~111 m away, scale saturates at the upper bound
        assert_eq!(placement.scale, 3.0);
        assert_eq!(placement.scale_vector(), Vector3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_placement_degenerate_pair() {
        let p = GeoPoint::new(35.0, 139.0);
        let placement = Placement::compute(&GeodesicPoseTransform::new(), &ScaleConfig::default(), p, p);

        assert_eq!(placement.distance_m, 0.0);
        assert_eq!(Vector3::from(placement.position), Vector3::zeros());
    }

    #[test]
    fn test_placement_json_output() {
        let placement = Placement::compute(
            &GeodesicPoseTransform::new(),
            &ScaleConfig::default(),
            GeoPoint::new(51.5074, -0.1278),
            GeoPoint::new(51.5080, -0.1270),
        );

        let json = placement.to_json(false).unwrap();
        assert!(json.contains("\"bearing_deg\""));
        let parsed: Placement = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.observer, placement.observer);
        assert_relative_eq!(parsed.distance_m, placement.distance_m, max_relative = 1e-12);

        assert!(placement.to_json(true).unwrap().contains('\n'));
    }
}
