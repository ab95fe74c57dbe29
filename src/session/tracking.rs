//! AR tracking session restart policy

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// How the AR session orients its world frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorldAlignment {
    /// +Y along gravity, −Z toward true north, +X east
    #[default]
    GravityAndHeading,
}

/// Configuration handed to the AR tracking session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrackingConfiguration {
    pub world_alignment: WorldAlignment,
}

/// Tracking session lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackingEvent {
    /// Session failed, typically no camera access
    Failed,
    Interrupted,
    InterruptionEnded,
}

/// Host response to a tracking event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackingAction {
    None,
    /// Re-run the session with the same configuration
    Restart {
        reset_tracking: bool,
        remove_existing_anchors: bool,
    },
}

impl TrackingConfiguration {
    /// Map a session event onto the host action
    pub fn on_event(&self, event: TrackingEvent) -> TrackingAction {
        match event {
            TrackingEvent::Failed => {
                warn!("tracking session failed");
                TrackingAction::None
            }
            TrackingEvent::Interrupted => {
                warn!("tracking session interrupted");
                TrackingAction::None
            }
            TrackingEvent::InterruptionEnded => {
                // Anchors from before the interruption no longer share the
                // heading-aligned frame
                info!(alignment = ?self.world_alignment, "tracking resumed, restarting session");
                TrackingAction::Restart {
                    reset_tracking: true,
                    remove_existing_anchors: true,
                }
            }
        }
    }
}
