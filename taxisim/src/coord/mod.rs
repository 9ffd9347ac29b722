//! Geographic math for the dispatch engine.
//!
//! Provides the great-circle distance used by the matcher to rank
//! waiting clients by proximity to a taxi.

mod types;

pub use types::LatLng;

use std::f64::consts::PI;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the great-circle (haversine) distance between two positions,
/// in kilometers.
///
/// Pure and total: any pair of finite coordinates yields a non-negative
/// distance, and `distance_km(x, x)` is zero.
#[inline]
pub fn distance_km(a: LatLng, b: LatLng) -> f64 {
    let lat1 = a.lat * PI / 180.0;
    let lat2 = b.lat * PI / 180.0;
    let delta_lat = (b.lat - a.lat) * PI / 180.0;
    let delta_lng = (b.lng - a.lng) * PI / 180.0;

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
