use std::sync::Arc;

use crate::geo::Coordinate;

/// A named geographic point. Immutable once registered with the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub name: Arc<str>,
    pub coordinate: Coordinate,
}

/// Whether a bus's stored stop sequence is a closed loop or a there-and-back line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusKind {
    /// Sequence begins and ends at the same stop; traversed exactly once, forward.
    Ring,
    /// Traversed forward, then backward over the same stops.
    Linear,
}

/// A named ordered sequence of stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
    pub name: Arc<str>,
    pub route: Vec<Arc<str>>,
    pub kind: BusKind,
}

impl Bus {
    /// The full stop sequence a passenger rides end to end once: the stored
    /// route for a ring, forward-then-backward (turnaround stop not repeated)
    /// for a linear bus.
    pub fn traversal(&self) -> Vec<Arc<str>> {
        match self.kind {
            BusKind::Ring => self.route.clone(),
            BusKind::Linear => {
                let mut out = self.route.clone();
                out.extend(self.route.iter().rev().skip(1).cloned());
                out
            }
        }
    }

    /// `len(route)` for a ring, `2*len(route) - 1` for a linear bus (a
    /// linear bus with 0 or 1 stops has nothing to double back over).
    pub fn stops_on_route(&self) -> usize {
        match self.kind {
            BusKind::Ring => self.route.len(),
            BusKind::Linear if self.route.len() <= 1 => self.route.len(),
            BusKind::Linear => 2 * self.route.len() - 1,
        }
    }

    /// Count of distinct stop names in the stored route.
    pub fn unique_stops(&self) -> usize {
        let mut names: Vec<&str> = self.route.iter().map(|s| s.as_ref()).collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    }
}

/// Global routing parameters shared by every bus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingParams {
    /// Minutes a passenger waits at any stop before boarding.
    pub wait_time: f64,
    /// Cruising speed, km/h, constant across every bus.
    pub velocity: f64,
}

impl RoutingParams {
    /// Cruising speed converted to meters per minute, the unit ride-edge
    /// weights are computed in.
    pub fn speed_m_per_min(&self) -> f64 {
        self.velocity * 1000.0 / 60.0
    }
}

/// Result of looking up which buses serve a stop.
#[derive(Debug, Clone, PartialEq)]
pub enum StopBuses {
    StopNotFound,
    NoBuses,
    Buses(Vec<Arc<str>>),
}

/// Derived statistics for a single bus's route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusStats {
    pub stops_on_route: usize,
    pub unique_stops: usize,
    pub road_length: f64,
    /// `None` when geographic length is too small to divide by meaningfully.
    pub curvature: Option<f64>,
}
