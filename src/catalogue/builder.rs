use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use super::{Bus, BuildError, Catalogue, DistanceTable, RoutingParams, Stop};
use crate::geo::Coordinate;

/// Mutable accumulator for catalogue records during the Build phase.
///
/// Consumed by [`CatalogueBuilder::build`] into an immutable [`Catalogue`];
/// there is no path back from `Catalogue` to `CatalogueBuilder`, so the
/// build → freeze → serve lifecycle is enforced by the type system rather
/// than a runtime flag.
#[derive(Debug, Default)]
pub struct CatalogueBuilder {
    stops: Vec<Stop>,
    stop_lookup: HashMap<Arc<str>, usize>,
    buses: Vec<Bus>,
    bus_lookup: HashMap<Arc<str>, usize>,
    distances: DistanceTable,
    routing: Option<RoutingParams>,
}

impl CatalogueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a stop. Rejects (and keeps the earlier registration for) a
    /// name already present.
    pub fn add_stop(&mut self, name: Arc<str>, coordinate: Coordinate) -> Result<(), BuildError> {
        if self.stop_lookup.contains_key(&name) {
            return Err(BuildError::DuplicateStop(name.to_string()));
        }
        let index = self.stops.len();
        self.stop_lookup.insert(name.clone(), index);
        self.stops.push(Stop { name, coordinate });
        Ok(())
    }

    /// Records a directed distance. May be called before either endpoint is
    /// registered — the table is keyed purely by name strings.
    pub fn set_distance(&mut self, from: Arc<str>, to: Arc<str>, meters: f64) {
        self.distances.set(from, to, meters);
    }

    /// Registers a bus. If any stop in `route` is not yet a registered stop,
    /// the whole bus is rejected (no partial registration) and the stop→bus
    /// index is left untouched.
    pub fn add_bus(
        &mut self,
        name: Arc<str>,
        route: Vec<Arc<str>>,
        kind: super::BusKind,
    ) -> Result<(), BuildError> {
        if self.bus_lookup.contains_key(&name) {
            return Err(BuildError::DuplicateBus(name.to_string()));
        }
        for stop in &route {
            if !self.stop_lookup.contains_key(stop.as_ref()) {
                return Err(BuildError::UnknownStopInRoute {
                    bus: name.to_string(),
                    stop: stop.to_string(),
                });
            }
        }

        let index = self.buses.len();
        self.bus_lookup.insert(name.clone(), index);
        self.buses.push(Bus { name, route, kind });
        Ok(())
    }

    /// Records the global routing parameters. Rejects non-finite or
    /// out-of-domain values.
    pub fn set_routing(&mut self, wait_time: f64, velocity: f64) -> Result<(), BuildError> {
        if !(wait_time.is_finite() && wait_time >= 0.0 && velocity.is_finite() && velocity > 0.0) {
            return Err(BuildError::InvalidRoutingParams {
                wait_time,
                velocity,
            });
        }
        self.routing = Some(RoutingParams {
            wait_time,
            velocity,
        });
        Ok(())
    }

    /// Consumes the builder, producing an immutable, array-backed catalogue.
    ///
    /// Buses not yet explicitly validated against the stop table (there are
    /// none by construction of `add_bus`) and the stop→bus index are both
    /// finalized here; the bus index within each stop's entry is sorted
    /// lexicographically by bus name.
    pub fn build(self) -> Catalogue {
        let mut stop_to_buses: HashMap<Arc<str>, Vec<Arc<str>>> = HashMap::new();
        for bus in &self.buses {
            let mut seen: Vec<&Arc<str>> = Vec::new();
            for stop in &bus.route {
                if seen.iter().any(|s| s.as_ref() == stop.as_ref()) {
                    continue;
                }
                seen.push(stop);
                stop_to_buses
                    .entry(stop.clone())
                    .or_default()
                    .push(bus.name.clone());
            }
        }
        for buses in stop_to_buses.values_mut() {
            buses.sort_unstable_by(|a, b| a.as_ref().cmp(b.as_ref()));
        }

        let mut buses = self.buses;
        buses.sort_unstable_by(|a, b| a.name.as_ref().cmp(b.name.as_ref()));
        let bus_lookup = buses
            .iter()
            .enumerate()
            .map(|(i, b)| (b.name.clone(), i))
            .collect();

        let routing = self.routing.unwrap_or_else(|| {
            warn!("routing parameters never set, defaulting to wait_time=0, velocity=1");
            RoutingParams {
                wait_time: 0.0,
                velocity: 1.0,
            }
        });

        Catalogue {
            stops: self.stops.into_boxed_slice(),
            stop_lookup: self.stop_lookup,
            buses: buses.into_boxed_slice(),
            bus_lookup,
            stop_to_buses,
            distances: self.distances,
            routing,
        }
    }
}
