use thiserror::Error;

/// Rejected geographic coordinate input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("non-finite coordinate: lat={lat}, lon={lon}")]
    NonFinite { lat: f64, lon: f64 },
    #[error("invalid latitude {value}: must be between -90 and 90 degrees")]
    InvalidLatitude { value: f64 },
    #[error("invalid longitude {value}: must be between -180 and 180 degrees")]
    InvalidLongitude { value: f64 },
    #[error("malformed coordinate '{input}': expected \"lat,lon\" in decimal degrees")]
    Malformed { input: String },
}
