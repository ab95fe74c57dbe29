//! Geodesic placement algorithms

pub mod geodesic;
pub mod rotation;
pub mod pose;

pub use geodesic::{bearing, distance, DistanceModel};
pub use rotation::{rotation_about_vertical, rotation_for_bearing};
pub use pose::{compute_pose, compute_pose_from_anchor, GeodesicPoseTransform, Pose3D};
