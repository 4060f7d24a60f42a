//! Projects geographic coordinates into the SVG canvas's coordinate space.

use transit_catalogue::geo::Coordinate;

use super::svg::Point;

const EPSILON: f64 = 1e-6;

fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Maps a `Coordinate` to an SVG point: a single zoom coefficient shared by
/// both axes (the smaller of the width- and height-derived coefficients,
/// falling back to whichever axis varies, or an identity projection when
/// every input point coincides).
#[derive(Debug, Clone, Copy)]
pub struct SphereProjector {
    padding: f64,
    min_lon: f64,
    max_lat: f64,
    zoom: f64,
}

impl SphereProjector {
    pub fn new(points: impl Iterator<Item = Coordinate>, max_width: f64, max_height: f64, padding: f64) -> Self {
        let points: Vec<Coordinate> = points.collect();
        if points.is_empty() {
            return SphereProjector {
                padding,
                min_lon: 0.0,
                max_lat: 0.0,
                zoom: 0.0,
            };
        }

        let min_lon = points.iter().map(|p| p.longitude).fold(f64::INFINITY, f64::min);
        let max_lon = points.iter().map(|p| p.longitude).fold(f64::NEG_INFINITY, f64::max);
        let min_lat = points.iter().map(|p| p.latitude).fold(f64::INFINITY, f64::min);
        let max_lat = points.iter().map(|p| p.latitude).fold(f64::NEG_INFINITY, f64::max);

        let width_zoom = (!is_zero(max_lon - min_lon)).then(|| (max_width - 2.0 * padding) / (max_lon - min_lon));
        let height_zoom = (!is_zero(max_lat - min_lat)).then(|| (max_height - 2.0 * padding) / (max_lat - min_lat));

        let zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(w), None) => w,
            (None, Some(h)) => h,
            (None, None) => 0.0,
        };

        SphereProjector {
            padding,
            min_lon,
            max_lat,
            zoom,
        }
    }

    pub fn project(&self, coordinate: Coordinate) -> Point {
        Point {
            x: (coordinate.longitude - self.min_lon) * self.zoom + self.padding,
            y: (self.max_lat - coordinate.latitude) * self.zoom + self.padding,
        }
    }
}
