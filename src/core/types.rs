//! Core data types for geodesic placement

use serde::{Deserialize, Serialize};

use crate::validation::error::GeoError;
use crate::validation::CoordinateValidator;

/// Point on the Earth's surface in WGS-84 geodetic degrees (altitude ignored)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees, positive north
    pub lat: f64,
    /// Longitude in decimal degrees, positive east
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build a point, rejecting non-finite or out-of-range coordinates
    pub fn validated(lat: f64, lon: f64) -> Result<Self, GeoError> {
        let point = Self { lat, lon };
        CoordinateValidator::validate_wgs84(&point)?;
        Ok(point)
    }

    /// Latitude and longitude in radians
    #[inline]
    pub fn to_radians(&self) -> (f64, f64) {
        (self.lat.to_radians(), self.lon.to_radians())
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

impl std::str::FromStr for GeoPoint {
    type Err = GeoError;

    /// Parse `"lat,lon"` in decimal degrees.
    ///
    /// Only the syntax is checked; range checks are left to `validated` or
    /// the session, which honors `validate_coordinates`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s.split_once(',').ok_or_else(|| GeoError::Malformed {
            input: s.to_string(),
        })?;
        let parse = |part: &str| {
            part.trim().parse::<f64>().map_err(|_| GeoError::Malformed {
                input: s.to_string(),
            })
        };
        Ok(Self::new(parse(lat)?, parse(lon)?))
    }
}
