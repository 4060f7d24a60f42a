//! The immutable, array-backed catalogue of stops, buses, and routing
//! parameters, plus the mutable builder that constructs it.
//!
//! Construction follows a build → freeze split: [`CatalogueBuilder`]
//! accumulates records with plain growable collections, and
//! [`CatalogueBuilder::build`] consumes it into a [`Catalogue`] backed by
//! boxed slices and dense lookups. `Catalogue` exposes no mutators.

mod builder;
mod distance;
mod entities;
mod error;
pub mod stats;

pub use builder::CatalogueBuilder;
pub use distance::DistanceTable;
pub use entities::{Bus, BusKind, BusStats, RoutingParams, Stop, StopBuses};
pub use error::BuildError;

use std::collections::HashMap;
use std::sync::Arc;

/// The frozen, read-only transit network: stops, buses, the stop→bus index,
/// the asymmetric road-distance table, and routing parameters.
///
/// All read operations are total: absent entities are reported as `None` or
/// an explicit enum variant, never a panic.
#[derive(Debug, Clone)]
pub struct Catalogue {
    stops: Box<[Stop]>,
    stop_lookup: HashMap<Arc<str>, usize>,
    buses: Box<[Bus]>,
    bus_lookup: HashMap<Arc<str>, usize>,
    stop_to_buses: HashMap<Arc<str>, Vec<Arc<str>>>,
    distances: DistanceTable,
    routing: RoutingParams,
}

impl Catalogue {
    pub fn get_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_lookup.get(name).map(|&i| &self.stops[i])
    }

    pub fn get_bus(&self, name: &str) -> Option<&Bus> {
        self.bus_lookup.get(name).map(|&i| &self.buses[i])
    }

    /// Dense index of a stop in this catalogue's stable iteration order, the
    /// same order the transfer graph assigns its vertex indices from.
    pub fn stop_index(&self, name: &str) -> Option<usize> {
        self.stop_lookup.get(name).copied()
    }

    pub fn get_stop_buses(&self, name: &str) -> StopBuses {
        if !self.stop_lookup.contains_key(name) {
            return StopBuses::StopNotFound;
        }
        match self.stop_to_buses.get(name) {
            None => StopBuses::NoBuses,
            Some(buses) if buses.is_empty() => StopBuses::NoBuses,
            Some(buses) => StopBuses::Buses(buses.clone()),
        }
    }

    pub fn get_bus_stats(&self, name: &str) -> Option<BusStats> {
        let bus = self.get_bus(name)?;
        Some(stats::bus_stats(self, bus))
    }

    /// `dist(from, to)` with symmetric fallback, `0.0` when entirely unknown.
    pub fn road_distance(&self, from: &str, to: &str) -> f64 {
        self.distances.get(from, to)
    }

    pub fn routing(&self) -> RoutingParams {
        self.routing
    }

    /// Stops in the stable order used to assign transfer-graph vertex indices.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Buses in lexicographic order by name (the renderer and stat dispatch
    /// both rely on this ordering for deterministic output).
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }
}
