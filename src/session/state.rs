//! Observer/target selection flow
//!
//! Location fixes stream in until the user picks a target; from then on the
//! observer is frozen so the placement stays consistent with the anchor frame
//! the AR session was started in. Before a pick, the target mirrors the
//! observer and placement collapses to the anchor origin.

use thiserror::Error;
use tracing::{debug, info};

use crate::algorithms::pose::GeodesicPoseTransform;
use crate::api::placement::Placement;
use crate::core::GeoPoint;
use crate::utils::config::PlacementConfig;
use crate::validation::{CoordinateValidator, GeoError};

/// Placement session failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("no observer location fix received yet")]
    NoObserverFix,
    #[error("rejected coordinate: {0}")]
    InvalidCoordinate(#[from] GeoError),
}

/// Tracks the observer fix and the selected target
#[derive(Debug, Clone)]
pub struct PlacementSession {
    config: PlacementConfig,
    transform: GeodesicPoseTransform,
    observer: Option<GeoPoint>,
    target: Option<GeoPoint>,
    target_selected: bool,
}

impl Default for PlacementSession {
    fn default() -> Self {
        Self::new(PlacementConfig::default())
    }
}

impl PlacementSession {
    pub fn new(config: PlacementConfig) -> Self {
        Self {
            transform: config.pose_transform(),
            config,
            observer: None,
            target: None,
            target_selected: false,
        }
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    pub fn observer(&self) -> Option<GeoPoint> {
        self.observer
    }

    pub fn target(&self) -> Option<GeoPoint> {
        self.target
    }

    pub fn has_selection(&self) -> bool {
        self.target_selected
    }

    /// Feed a location fix.
    ///
    /// Returns whether the host should keep location updates running. Once a
    /// target is selected the first fix freezes the observer and later fixes
    /// are ignored.
    pub fn update_location(&mut self, fix: GeoPoint) -> Result<bool, SessionError> {
        if self.target_selected && self.observer.is_some() {
            debug!(%fix, "observer frozen, ignoring location fix");
            return Ok(false);
        }

        self.check(&fix)?;
        self.observer = Some(fix);
        if !self.target_selected {
            self.target = Some(fix);
        }
        debug!(%fix, "observer location updated");
        Ok(!self.target_selected)
    }

    /// Select the placement target, freezing the observer
    pub fn select_target(&mut self, target: GeoPoint) -> Result<(), SessionError> {
        self.check(&target)?;
        self.target = Some(target);
        self.target_selected = true;
        info!(%target, observer = ?self.observer, "target selected");
        Ok(())
    }

    /// Drop the selection and resume following the observer
    pub fn clear_target(&mut self) {
        self.target = self.observer;
        self.target_selected = false;
        info!("target cleared, resuming location updates");
    }

    /// Placement of the current target relative to the observer
    pub fn place(&self) -> Result<Placement, SessionError> {
        let observer = self.observer.ok_or(SessionError::NoObserverFix)?;
        let target = self.target.unwrap_or(observer);

        let placement = Placement::compute(&self.transform, &self.config.scale, observer, target);
        info!(
            distance_m = placement.distance_m,
            bearing_deg = placement.bearing_deg,
            scale = placement.scale,
            "marker placed"
        );
        Ok(placement)
    }

    fn check(&self, point: &GeoPoint) -> Result<(), SessionError> {
        if self.config.validate_coordinates {
            CoordinateValidator::validate_wgs84(point)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_place_without_fix_fails() {
        let session = PlacementSession::default();
        assert_eq!(session.place(), Err(SessionError::NoObserverFix));
    }

    #[test]
    fn test_target_defaults_to_observer() {
        let mut session = PlacementSession::default();
        assert!(session.update_location(GeoPoint::new(40.0, -74.0)).unwrap());
        assert_eq!(session.target(), session.observer());

        let placement = session.place().unwrap();
        assert_eq!(placement.distance_m, 0.0);
        assert_eq!(placement.position.x, 0.0);
        assert_eq!(placement.position.z, 0.0);
    }

    #[test]
    fn test_observer_follows_fixes_until_selection() {
        let mut session = PlacementSession::default();
        session.update_location(GeoPoint::new(40.0, -74.0)).unwrap();
        session.update_location(GeoPoint::new(40.001, -74.0)).unwrap();
        assert_eq!(session.observer(), Some(GeoPoint::new(40.001, -74.0)));

        session.select_target(GeoPoint::new(40.002, -74.0)).unwrap();
        assert!(session.has_selection());

        // Frozen
        assert!(!session.update_location(GeoPoint::new(41.0, -74.0)).unwrap());
        assert_eq!(session.observer(), Some(GeoPoint::new(40.001, -74.0)));
    }

    #[test]
    fn test_selected_target_placement() {
        let mut session = PlacementSession::default();
        session.update_location(GeoPoint::new(0.0, 0.0)).unwrap();
        session.select_target(GeoPoint::new(0.0, 0.01)).unwrap();

        let placement = session.place().unwrap();
        assert_relative_eq!(placement.bearing_deg, 90.0, epsilon = 1e-9);
        assert_relative_eq!(placement.position.x, placement.distance_m, max_relative = 1e-12);
        // ~1.1 km away
        assert_eq!(placement.scale, 1.5);
    }

    #[test]
    fn test_selection_before_fix_still_needs_observer() {
        let mut session = PlacementSession::default();
        session.select_target(GeoPoint::new(10.0, 10.0)).unwrap();
        assert_eq!(session.place(), Err(SessionError::NoObserverFix));
    }

    #[test]
    fn test_first_fix_after_selection_is_accepted() {
        let mut session = PlacementSession::default();
        session.select_target(GeoPoint::new(10.0, 10.0)).unwrap();

        // Fix accepted, then the observer freezes
        assert!(!session.update_location(GeoPoint::new(10.001, 10.0)).unwrap());
        assert_eq!(session.observer(), Some(GeoPoint::new(10.001, 10.0)));
        assert_eq!(session.target(), Some(GeoPoint::new(10.0, 10.0)));

        let placement = session.place().unwrap();
        assert_eq!(placement.target, GeoPoint::new(10.0, 10.0));
        assert!(placement.distance_m > 100.0);
        assert!(placement.position.z > 0.0, "target lies south of the observer");

        assert!(!session.update_location(GeoPoint::new(10.5, 10.0)).unwrap());
        assert_eq!(session.observer(), Some(GeoPoint::new(10.001, 10.0)));
    }

    #[test]
    fn test_clear_target_resumes_updates() {
        let mut session = PlacementSession::default();
        session.update_location(GeoPoint::new(1.0, 1.0)).unwrap();
        session.select_target(GeoPoint::new(1.01, 1.0)).unwrap();
        session.clear_target();

        assert!(!session.has_selection());
        assert_eq!(session.target(), Some(GeoPoint::new(1.0, 1.0)));
        assert!(session.update_location(GeoPoint::new(1.5, 1.0)).unwrap());
    }

    #[test]
    fn test_invalid_coordinates_rejected() {
        let mut session = PlacementSession::default();
        let result = session.select_target(GeoPoint::new(95.0, 0.0));
        assert_eq!(
            result,
            Err(SessionError::InvalidCoordinate(GeoError::InvalidLatitude { value: 95.0 }))
        );
        assert!(!session.has_selection());
    }

    #[test]
    fn test_parsed_coordinates_follow_validation_setting() {
        let point: GeoPoint = "95.0,10.0".parse().unwrap();

        let mut strict = PlacementSession::default();
        assert!(matches!(
            strict.update_location(point),
            Err(SessionError::InvalidCoordinate(GeoError::InvalidLatitude { .. }))
        ));

        let mut lenient = PlacementSession::new(PlacementConfig {
            validate_coordinates: false,
            ..PlacementConfig::default()
        });
        assert!(lenient.update_location(point).unwrap());
        assert_eq!(lenient.observer(), Some(point));
    }

    #[test]
    fn test_validation_can_be_disabled() {
        let config = PlacementConfig {
            validate_coordinates: false,
            ..PlacementConfig::default()
        };
        let mut session = PlacementSession::new(config);
        assert!(session.update_location(GeoPoint::new(95.0, 0.0)).is_ok());
    }
}
