//! Coordinate type definitions

use serde::{Deserialize, Serialize};

/// A geographic position in decimal degrees.
///
/// Positive latitude is north, positive longitude is east. The engine
/// does not validate ranges; the distance math is total over any finite
/// inputs, so range checking is left to callers that need it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl LatLng {
    /// Creates a position from latitude and longitude in degrees.
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
