//! Earth model constants

/// Mean Earth radius used by the great-circle distance (m)
pub const EARTH_MEAN_RADIUS_M: f64 = 6_371_000.0;

/// WGS-84 semi-major axis (m)
pub const WGS84_SEMI_MAJOR_AXIS_M: f64 = 6_378_137.0;

/// WGS-84 flattening
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257223563;

/// WGS-84 semi-minor axis (m)
pub const WGS84_SEMI_MINOR_AXIS_M: f64 = WGS84_SEMI_MAJOR_AXIS_M * (1.0 - WGS84_FLATTENING);
