use crate::models::GeoPoint;
use geo::{HaversineDistance, Point};

/// Great-circle distance between two points in meters
///
/// Uses the haversine formula (via the `geo` crate), matching the spherical
/// distance semantics of the PostGIS geography prefilter closely enough for
/// tier scoring.
#[inline]
pub fn distance_meters(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let pa = Point::new(a.longitude, a.latitude);
    let pb = Point::new(b.longitude, b.latitude);
    pa.haversine_distance(&pb)
}

/// Check whether `point` lies within `radius_m` meters of `origin`
#[inline]
pub fn within_radius(origin: &GeoPoint, point: &GeoPoint, radius_m: f64) -> bool {
    distance_meters(origin, point) <= radius_m
}
