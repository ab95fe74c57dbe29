//! Core types and constants for geodesic placement

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
