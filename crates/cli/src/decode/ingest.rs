//! Drives a parsed [`InputDocument`] into a [`CatalogueBuilder`] in the
//! fixed phase order stops → distances → buses → routing parameters.
//!
//! Per-record `BuildError`s are logged and the affected record is dropped;
//! nothing here aborts processing of the remaining entries — only a
//! document that fails to parse as JSON at all is fatal, and that happens
//! one layer up, before this function ever runs.

use tracing::warn;
use transit_catalogue::catalogue::{BusKind, Catalogue, CatalogueBuilder};
use transit_catalogue::geo::Coordinate;

use super::document::{BaseRequest, InputDocument};

pub fn build_catalogue(document: &InputDocument) -> Catalogue {
    let mut builder = CatalogueBuilder::new();

    for request in &document.base_requests {
        if let BaseRequest::Stop { name, latitude, longitude, .. } = request {
            if let Err(err) = builder.add_stop(name.as_str().into(), Coordinate::new(*latitude, *longitude)) {
                warn!(%err, "dropping stop entry");
            }
        }
    }

    for request in &document.base_requests {
        if let BaseRequest::Stop { name, road_distances, .. } = request {
            for (to, meters) in road_distances {
                builder.set_distance(name.as_str().into(), to.as_str().into(), *meters);
            }
        }
    }

    for request in &document.base_requests {
        if let BaseRequest::Bus { name, stops, is_roundtrip } = request {
            let kind = if *is_roundtrip { BusKind::Ring } else { BusKind::Linear };
            let route = stops.iter().map(|s| s.as_str().into()).collect();
            if let Err(err) = builder.add_bus(name.as_str().into(), route, kind) {
                warn!(%err, "dropping bus entry");
            }
        }
    }

    if let Err(err) = builder.set_routing(document.routing_settings.bus_wait_time, document.routing_settings.bus_velocity) {
        warn!(%err, "invalid routing settings, falling back to defaults");
    }

    builder.build()
}
