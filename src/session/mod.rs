//! Host-application session model
//!
//! Pure state machines for the pieces of the AR host that surround the pose
//! transform: location authorization, target selection, and tracking restarts.

pub mod authorization;
pub mod state;
pub mod tracking;

pub use authorization::{AuthorizationAction, AuthorizationStatus};
pub use state::{PlacementSession, SessionError};
pub use tracking::{TrackingAction, TrackingConfiguration, TrackingEvent, WorldAlignment};
