//! Great-circle distance on a sphere approximating the Earth.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters, as used throughout this engine's distance math.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A geographic point, `(lat, lng)` in degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance between two coordinates, in meters.
///
/// Uses the spherical law of cosines; symmetric, and zero for coincident points
/// within floating-point rounding.
pub fn great_circle(a: Coordinate, b: Coordinate) -> f64 {
    if a.latitude == b.latitude && a.longitude == b.longitude {
        return 0.0;
    }

    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let cos_angle = lat_a.sin() * lat_b.sin() + lat_a.cos() * lat_b.cos() * dlon.cos();
    // Clamp against rounding that can push |cos_angle| fractionally past 1.
    let angle = cos_angle.clamp(-1.0, 1.0).acos();
    angle * EARTH_RADIUS_METERS
}
