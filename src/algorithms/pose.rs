//! Geodesic pose transform
//!
//! Converts an (observer, target) pair into a rigid placement inside an AR
//! anchor frame aligned to gravity and compass heading: +Y up, −Z true north,
//! +X east. The pipeline is distance → bearing → rotation → translation →
//! combined homogeneous transform.

use nalgebra::{Matrix4, Rotation3, Translation3, Vector3};
use tracing::debug;

use crate::algorithms::geodesic::{self, DistanceModel};
use crate::algorithms::rotation::rotation_for_bearing;
use crate::core::GeoPoint;

/// Rigid placement of a target relative to the observer
#[derive(Debug, Clone, PartialEq)]
pub struct Pose3D {
    /// Distance from observer to target (m)
    pub distance: f64,
    /// Forward azimuth, clockwise from north (rad)
    pub bearing: f64,
    /// Rotation about the vertical axis
    pub rotation: Rotation3<f64>,
    /// Offset along the rotated forward axis
    pub offset: Translation3<f64>,
    /// `anchor · rotation · offset`
    pub transform: Matrix4<f64>,
}

impl Pose3D {
    /// World-space position: the translation column of the transform
    pub fn position(&self) -> Vector3<f64> {
        self.transform.fixed_view::<3, 1>(0, 3).into_owned()
    }

    /// Length of the position projected on the horizontal (XZ) plane
    pub fn horizontal_distance(&self) -> f64 {
        let p = self.position();
        p.x.hypot(p.z)
    }

    /// Observer and target coincide; the bearing carries no direction
    pub fn is_degenerate(&self) -> bool {
        self.distance == 0.0
    }
}

/// Pose transform with a configurable distance model
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeodesicPoseTransform {
    distance_model: DistanceModel,
}

impl GeodesicPoseTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_distance_model(distance_model: DistanceModel) -> Self {
        Self { distance_model }
    }

    pub fn distance_model(&self) -> DistanceModel {
        self.distance_model
    }

    /// Pose of `target` seen from `observer`, anchored at the identity
    pub fn compute(&self, observer: &GeoPoint, target: &GeoPoint) -> Pose3D {
        self.compute_from_anchor(&Matrix4::identity(), observer, target)
    }

    /// Pose of `target` composed onto an existing anchor transform
    pub fn compute_from_anchor(
        &self,
        anchor: &Matrix4<f64>,
        observer: &GeoPoint,
        target: &GeoPoint,
    ) -> Pose3D {
        let distance = self.distance_model.distance(observer, target);
        let bearing = geodesic::bearing(observer, target);

        let rotation = rotation_for_bearing(bearing);
        let offset = Translation3::new(0.0, 0.0, -distance);
        let local = rotation.to_homogeneous() * offset.to_homogeneous();
        let transform = anchor * local;

        debug!(
            %observer,
            %target,
            distance,
            bearing_deg = bearing.to_degrees(),
            "computed geodesic pose"
        );

        Pose3D {
            distance,
            bearing,
            rotation,
            offset,
            transform,
        }
    }
}

/// Pose of `target` seen from `observer` using the haversine distance
pub fn compute_pose(observer: &GeoPoint, target: &GeoPoint) -> Pose3D {
    GeodesicPoseTransform::new().compute(observer, target)
}

/// Pose of `target` composed onto `anchor` using the haversine distance
pub fn compute_pose_from_anchor(
    anchor: &Matrix4<f64>,
    observer: &GeoPoint,
    target: &GeoPoint,
) -> Pose3D {
    GeodesicPoseTransform::new().compute_from_anchor(anchor, observer, target)
}
