//! Great-circle distance.

use super::Coordinate;

/// Earth's mean radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Great-circle distance between two coordinates in miles (haversine).
///
/// The result is symmetric bit-for-bit and zero for identical points.
pub fn great_circle_miles(a: Coordinate, b: Coordinate) -> f64 {
    // abs() keeps the computation identical for (a, b) and (b, a)
    let d_lat = (b.lat() - a.lat()).abs().to_radians();
    let d_lon = (b.lon() - a.lon()).abs().to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat().to_radians().cos() * b.lat().to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_MILES * h.sqrt().min(1.0).asin()
}

/// Linear interpolation between two coordinates.
///
/// `fraction` is clamped to [0, 1]. The result stays within the bounding box
/// of the two inputs, so it is always a valid coordinate.
pub fn interpolate(a: Coordinate, b: Coordinate, fraction: f64) -> Coordinate {
    let t = fraction.clamp(0.0, 1.0);
    let lon = a.lon() + (b.lon() - a.lon()) * t;
    let lat = a.lat() + (b.lat() - a.lat()) * t;
    // Clamp guards against rounding a hair past the endpoints
    Coordinate::new(
        lon.clamp(a.lon().min(b.lon()), a.lon().max(b.lon())),
        lat.clamp(a.lat().min(b.lat()), a.lat().max(b.lat())),
    )
    .unwrap_or(a)
}
