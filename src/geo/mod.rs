//! Geographic proximity

mod distance;

pub use distance::{haversine_km, is_near, GeoPoint, EARTH_RADIUS_KM, NEAR_THRESHOLD_KM};
