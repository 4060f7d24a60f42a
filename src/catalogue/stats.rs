//! Pure functions deriving route statistics from a bus and its owning catalogue.

use super::{Bus, BusStats, Catalogue};
use crate::geo::great_circle;

const CURVATURE_EPSILON: f64 = 1e-6;

/// Sum of great-circle distances between consecutive stops in `bus.traversal()`.
pub fn geographic_length(catalogue: &Catalogue, bus: &Bus) -> f64 {
    let traversal = bus.traversal();
    traversal
        .windows(2)
        .map(|pair| {
            let a = catalogue
                .get_stop(&pair[0])
                .expect("bus traversal only names registered stops")
                .coordinate;
            let b = catalogue
                .get_stop(&pair[1])
                .expect("bus traversal only names registered stops")
                .coordinate;
            great_circle(a, b)
        })
        .sum()
}

/// Sum of road-distance-table lookups (with symmetric fallback) between
/// consecutive stops in `bus.traversal()`.
pub fn road_length(catalogue: &Catalogue, bus: &Bus) -> f64 {
    let traversal = bus.traversal();
    traversal
        .windows(2)
        .map(|pair| catalogue.road_distance(&pair[0], &pair[1]))
        .sum()
}

/// `road_length / geographic_length`, or `None` when the denominator is too
/// small to divide by meaningfully.
pub fn curvature(road_length: f64, geographic_length: f64) -> Option<f64> {
    if geographic_length > CURVATURE_EPSILON {
        Some(road_length / geographic_length)
    } else {
        None
    }
}

/// Computes the full `BusStats` record for a bus already known to exist.
pub fn bus_stats(catalogue: &Catalogue, bus: &Bus) -> BusStats {
    let geo_len = geographic_length(catalogue, bus);
    let road_len = road_length(catalogue, bus);
    BusStats {
        stops_on_route: bus.stops_on_route(),
        unique_stops: bus.unique_stops(),
        road_length: road_len,
        curvature: curvature(road_len, geo_len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{BusKind, CatalogueBuilder};

    #[test]
    fn linear_bus_stats_match_scenario() {
        let mut builder = CatalogueBuilder::new();
        builder
            .add_stop("X".into(), crate::geo::Coordinate::new(0.0, 0.0))
            .unwrap();
        builder
            .add_stop("Y".into(), crate::geo::Coordinate::new(0.0, 0.01))
            .unwrap();
        builder
            .add_stop("Z".into(), crate::geo::Coordinate::new(0.0, 0.02))
            .unwrap();
        builder.set_distance("X".into(), "Y".into(), 100.0);
        builder.set_distance("Y".into(), "Z".into(), 200.0);
        builder.set_distance("Z".into(), "Y".into(), 250.0);
        builder.set_distance("Y".into(), "X".into(), 150.0);
        builder
            .add_bus(
                "2".into(),
                vec!["X".into(), "Y".into(), "Z".into()],
                BusKind::Linear,
            )
            .unwrap();

        let catalogue = builder.build();
        let bus = catalogue.get_bus("2").unwrap();
        let stats = bus_stats(&catalogue, bus);
        assert_eq!(stats.stops_on_route, 5);
        assert_eq!(stats.unique_stops, 3);
        assert_eq!(stats.road_length, 700.0);
    }

    #[test]
    fn curvature_is_omitted_for_degenerate_geography() {
        assert_eq!(curvature(100.0, 0.0), None);
        assert_eq!(curvature(100.0, 1e-9), None);
        assert_eq!(curvature(200.0, 100.0), Some(2.0));
    }
}
