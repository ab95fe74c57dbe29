//! Great-circle distance and forward azimuth between geodetic points
//!
//! Two distance models are offered:
//! - `Haversine`: spherical great-circle on the mean Earth radius
//! - `Ellipsoidal`: Vincenty inverse on the WGS-84 ellipsoid, close to what
//!   platform location services report
//!
//! Bearings are clockwise from true north in radians, range (-π, π].

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::warn;

use crate::core::{
    GeoPoint, EARTH_MEAN_RADIUS_M, WGS84_FLATTENING, WGS84_SEMI_MAJOR_AXIS_M,
    WGS84_SEMI_MINOR_AXIS_M,
};

/// Iteration cap for the Vincenty lambda refinement
const VINCENTY_MAX_ITERATIONS: usize = 200;

/// Convergence threshold on lambda (radians, ~0.06 mm)
const VINCENTY_TOLERANCE: f64 = 1e-12;

/// Model used to measure the distance between observer and target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceModel {
    /// Spherical great-circle distance
    #[default]
    Haversine,
    /// WGS-84 ellipsoidal distance (Vincenty inverse)
    Ellipsoidal,
}

impl DistanceModel {
    /// Distance in meters between two points under this model
    pub fn distance(&self, from: &GeoPoint, to: &GeoPoint) -> f64 {
        match self {
            DistanceModel::Haversine => haversine_distance(from, to),
            DistanceModel::Ellipsoidal => vincenty_distance(from, to).unwrap_or_else(|| {
                warn!(%from, %to, "Vincenty inverse did not converge, using haversine");
                haversine_distance(from, to)
            }),
        }
    }
}

/// Great-circle distance in meters (haversine, mean Earth radius)
pub fn distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    haversine_distance(from, to)
}

/// Haversine great-circle distance in meters.
///
/// Exactly zero for coincident points.
pub fn haversine_distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points
    let a = a.clamp(0.0, 1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_MEAN_RADIUS_M * c
}

/// Vincenty inverse distance on the WGS-84 ellipsoid in meters.
///
/// Returns `None` when the lambda iteration fails to converge, which happens
/// for nearly antipodal points.
pub fn vincenty_distance(from: &GeoPoint, to: &GeoPoint) -> Option<f64> {
    let a = WGS84_SEMI_MAJOR_AXIS_M;
    let b = WGS84_SEMI_MINOR_AXIS_M;
    let f = WGS84_FLATTENING;

    let l = (to.lon - from.lon).to_radians();
    let u1 = ((1.0 - f) * from.lat.to_radians().tan()).atan();
    let u2 = ((1.0 - f) * to.lat.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    for _ in 0..VINCENTY_MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();

        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            // Coincident points
            return Some(0.0);
        }

        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

        // Both points on the equator
        let cos_2sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };

        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))));

        if (lambda - lambda_prev).abs() < VINCENTY_TOLERANCE {
            let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
            let big_a =
                1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
            let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
            let delta_sigma = big_b
                * sin_sigma
                * (cos_2sigma_m
                    + big_b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))
                            - big_b / 6.0
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * sin_sigma.powi(2))
                                * (-3.0 + 4.0 * cos_2sigma_m.powi(2))));

            return Some(b * big_a * (sigma - delta_sigma));
        }
    }

    None
}

/// Forward azimuth from `from` to `to` in radians, clockwise from true north.
///
/// Coincident points yield 0; the value carries no direction when the
/// distance is zero.
pub fn bearing(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();
    let d_lon = lon2 - lon1;

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    let azimuth = y.atan2(x);

    // A signed-zero longitude difference yields -π for due south
    if azimuth == -PI {
        PI
    } else {
        azimuth
    }
}
