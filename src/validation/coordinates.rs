//! WGS-84 coordinate range checks

use crate::core::GeoPoint;
use crate::validation::error::GeoError;

/// Coordinate validation utilities
pub struct CoordinateValidator;

impl CoordinateValidator {
    /// Validate WGS-84 geodetic coordinates
    pub fn validate_wgs84(point: &GeoPoint) -> Result<(), GeoError> {
        if !point.lat.is_finite() || !point.lon.is_finite() {
            return Err(GeoError::NonFinite { lat: point.lat, lon: point.lon });
        }

        if !(-90.0..=90.0).contains(&point.lat) {
            return Err(GeoError::InvalidLatitude { value: point.lat });
        }

        if !(-180.0..=180.0).contains(&point.lon) {
            return Err(GeoError::InvalidLongitude { value: point.lon });
        }

        Ok(())
    }

    /// Validate an (observer, target) pair before placement
    pub fn validate_pair(observer: &GeoPoint, target: &GeoPoint) -> Result<(), GeoError> {
        Self::validate_wgs84(observer)?;
        Self::validate_wgs84(target)
    }
}
