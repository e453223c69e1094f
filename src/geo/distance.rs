//! Haversine great-circle distance

use serde::{Deserialize, Serialize};

/// Mean earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Two points closer than this are considered near each other
pub const NEAR_THRESHOLD_KM: f64 = 100.0;

/// A coordinate pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a point from parsed components.
    ///
    /// Anything other than exactly two finite components yields `None`.
    pub fn from_components(components: &[f64]) -> Option<Self> {
        match components {
            [lat, lng] if lat.is_finite() && lng.is_finite() => Some(Self::new(*lat, *lng)),
            _ => None,
        }
    }

    /// Distance to another point in kilometers
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        haversine_km(self.lat, self.lng, other.lat, other.lng)
    }

    /// Returns true if `other` is within the near threshold
    pub fn is_near(&self, other: &GeoPoint) -> bool {
        is_near(self.lat, self.lng, other.lat, other.lng)
    }
}

/// Great-circle distance between two coordinates in kilometers
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = lat2_rad - lat1_rad;
    let delta_lng = lng2.to_radians() - lng1.to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);

    // Rounding can push `a` just past 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Returns true if the two coordinates are within `NEAR_THRESHOLD_KM`
pub fn is_near(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> bool {
    haversine_km(lat1, lng1, lat2, lng2) <= NEAR_THRESHOLD_KM
}
