use transit_catalogue::catalogue::{BusKind, CatalogueBuilder};
use transit_catalogue::geo::Coordinate;

#[test]
fn bus_stats_scenario() {
    let mut builder = CatalogueBuilder::new();
    builder.add_stop("X".into(), Coordinate::new(0.0, 0.0)).unwrap();
    builder.add_stop("Y".into(), Coordinate::new(0.0, 0.01)).unwrap();
    builder.add_stop("Z".into(), Coordinate::new(0.0, 0.02)).unwrap();
    builder.set_distance("X".into(), "Y".into(), 100.0);
    builder.set_distance("Y".into(), "Z".into(), 200.0);
    builder.set_distance("Z".into(), "Y".into(), 250.0);
    builder.set_distance("Y".into(), "X".into(), 150.0);
    builder
        .add_bus("2".into(), vec!["X".into(), "Y".into(), "Z".into()], BusKind::Linear)
        .unwrap();
    builder.set_routing(1.0, 10.0).unwrap();
    let catalogue = builder.build();

    let stats = catalogue.get_bus_stats("2").unwrap();
    assert_eq!(stats.stops_on_route, 5);
    assert_eq!(stats.unique_stops, 3);
    assert_eq!(stats.road_length, 700.0);
    assert!(stats.curvature.unwrap() >= 1.0);
}

#[test]
fn ring_bus_stops_on_route_equals_stored_length() {
    let mut builder = CatalogueBuilder::new();
    builder.add_stop("R1".into(), Coordinate::new(0.0, 0.0)).unwrap();
    builder.add_stop("R2".into(), Coordinate::new(0.0, 0.01)).unwrap();
    builder.add_stop("R3".into(), Coordinate::new(0.0, 0.02)).unwrap();
    builder
        .add_bus(
            "ring".into(),
            vec!["R1".into(), "R2".into(), "R3".into(), "R1".into()],
            BusKind::Ring,
        )
        .unwrap();
    builder.set_routing(1.0, 10.0).unwrap();
    let catalogue = builder.build();

    let stats = catalogue.get_bus_stats("ring").unwrap();
    assert_eq!(stats.stops_on_route, 4);
    assert_eq!(stats.unique_stops, 3);
}

#[test]
fn unknown_bus_has_no_stats() {
    let catalogue = CatalogueBuilder::new().build();
    assert!(catalogue.get_bus_stats("nope").is_none());
}
