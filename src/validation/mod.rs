//! Coordinate validation and error types

pub mod coordinates;
pub mod error;

pub use coordinates::CoordinateValidator;
pub use error::GeoError;
