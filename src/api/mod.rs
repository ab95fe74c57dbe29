//! Consumer-facing outputs: marker placement and scale

pub mod placement;
pub mod scale;

pub use placement::{AnchorPosition, Placement};
pub use scale::{marker_scale, ScaleConfig};
