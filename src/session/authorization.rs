//! Location authorization decision table

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Authorization state reported by the platform location service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorizationStatus {
    NotDetermined,
    Restricted,
    Denied,
    AuthorizedWhenInUse,
    AuthorizedAlways,
}

/// What the host should do in response to an authorization change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorizationAction {
    /// Prompt the user for when-in-use access
    RequestWhenInUse,
    /// Begin streaming location updates
    StartLocationUpdates,
    /// Tell the user to enable location services; wait for re-authorization
    AlertLocationIssue,
}

impl AuthorizationStatus {
    pub fn is_authorized(&self) -> bool {
        matches!(
            self,
            AuthorizationStatus::AuthorizedWhenInUse | AuthorizationStatus::AuthorizedAlways
        )
    }

    /// Map a status change onto the host action
    pub fn action(&self) -> AuthorizationAction {
        match self {
            AuthorizationStatus::NotDetermined => {
                info!("location authorization not determined, requesting");
                AuthorizationAction::RequestWhenInUse
            }
            AuthorizationStatus::AuthorizedWhenInUse | AuthorizationStatus::AuthorizedAlways => {
                info!(status = ?self, "location services authorized");
                AuthorizationAction::StartLocationUpdates
            }
            AuthorizationStatus::Denied | AuthorizationStatus::Restricted => {
                warn!(status = ?self, "location services unavailable");
                AuthorizationAction::AlertLocationIssue
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorized_states_start_updates() {
        assert_eq!(
            AuthorizationStatus::AuthorizedWhenInUse.action(),
            AuthorizationAction::StartLocationUpdates
        );
        assert_eq!(
            AuthorizationStatus::AuthorizedAlways.action(),
            AuthorizationAction::StartLocationUpdates
        );
    }

    #[test]
    fn test_refused_states_alert() {
        assert_eq!(AuthorizationStatus::Denied.action(), AuthorizationAction::AlertLocationIssue);
        assert_eq!(AuthorizationStatus::Restricted.action(), AuthorizationAction::AlertLocationIssue);
        assert!(!AuthorizationStatus::Denied.is_authorized());
    }

    #[test]
    fn test_undetermined_requests() {
        assert_eq!(
            AuthorizationStatus::NotDetermined.action(),
            AuthorizationAction::RequestWhenInUse
        );
    }
}
