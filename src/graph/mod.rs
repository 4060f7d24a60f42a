//! The derived transfer graph and its precomputed shortest-path oracle.
//!
//! Two vertices per stop — `wait` and `board` — model the one-time boarding
//! delay separately from the ride itself. Built once from a frozen
//! [`Catalogue`](crate::catalogue::Catalogue); shortest-path trees from every
//! wait vertex are precomputed up front, one independent Dijkstra run per
//! stop, fanned out across a thread pool since the runs share no state.

mod edge;
mod oracle;

pub use edge::{Edge, EdgeKind};

use std::collections::HashMap;
use std::sync::Arc;

use rayon::prelude::*;

use crate::catalogue::{Bus, BusKind, Catalogue};

/// Vertex ids, dense over `0..2*stop_count`.
fn wait_vertex(stop_index: usize) -> u32 {
    2 * stop_index as u32
}

fn board_vertex(stop_index: usize) -> u32 {
    2 * stop_index as u32 + 1
}

/// One leg of an itinerary: either paying the wait-time cost at a stop, or
/// riding a bus over one or more consecutive segments without alighting.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteItem {
    Wait { stop: Arc<str>, time: f64 },
    Ride {
        bus: Arc<str>,
        span_count: u32,
        time: f64,
    },
}

/// Outcome of an itinerary query: either unreachable (or an unknown
/// endpoint — the two are indistinguishable at this layer, matching the
/// wire protocol's single "not found" shape), or the total time and ordered
/// legs of the fastest itinerary.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteResult {
    NotFound,
    Found {
        total_time: f64,
        items: Vec<RouteItem>,
    },
}

/// The frozen transfer graph plus its precomputed per-source shortest-path
/// trees. Built once from a [`Catalogue`] and never mutated.
#[derive(Debug, Clone)]
pub struct TransferGraph {
    stop_index: HashMap<Arc<str>, usize>,
    edges: Box<[Edge]>,
    adjacency: Box<[Box<[u32]>]>,
    /// `dist[s][v]`: shortest accumulated minutes from `W(s)` to vertex `v`.
    dist: Box<[Box<[f64]>]>,
    /// `prev_edge[s][v]`: edge that last relaxed `v` on the tree rooted at `W(s)`.
    prev_edge: Box<[Box<[Option<u32>]>]>,
}

impl TransferGraph {
    /// Builds the transfer graph and precomputes all-pairs shortest paths
    /// from the given catalogue. The catalogue's `stops()` order fixes the
    /// dense stop indices the graph's vertices are derived from.
    pub fn build(catalogue: &Catalogue) -> Self {
        let stops = catalogue.stops();
        let stop_index: HashMap<Arc<str>, usize> = stops
            .iter()
            .map(|s| {
                let i = catalogue
                    .stop_index(&s.name)
                    .expect("stop from catalogue.stops() is registered in the catalogue");
                (s.name.clone(), i)
            })
            .collect();
        let vertex_count = 2 * stops.len();

        let mut edges: Vec<Edge> = Vec::new();
        let mut adjacency: Vec<Vec<u32>> = vec![Vec::new(); vertex_count];

        let routing = catalogue.routing();
        for (i, stop) in stops.iter().enumerate() {
            let edge_id = edges.len() as u32;
            edges.push(Edge {
                from: wait_vertex(i),
                to: board_vertex(i),
                weight: routing.wait_time,
                kind: EdgeKind::Wait {
                    stop: stop.name.clone(),
                },
            });
            adjacency[wait_vertex(i) as usize].push(edge_id);
        }

        let speed = routing.speed_m_per_min();
        for bus in catalogue.buses() {
            emit_ride_edges(catalogue, bus, &bus.route, speed, &stop_index, &mut edges, &mut adjacency);
            if bus.kind == BusKind::Linear {
                let reversed: Vec<Arc<str>> = bus.route.iter().rev().cloned().collect();
                emit_ride_edges(catalogue, bus, &reversed, speed, &stop_index, &mut edges, &mut adjacency);
            }
        }

        let adjacency: Box<[Box<[u32]>]> = adjacency.into_iter().map(Vec::into_boxed_slice).collect();
        let edges: Box<[Edge]> = edges.into_boxed_slice();

        let trees: Vec<(Box<[f64]>, Box<[Option<u32>]>)> = (0..stops.len())
            .into_par_iter()
            .map(|s| oracle::dijkstra_from(wait_vertex(s), vertex_count, &adjacency, &edges))
            .collect();
        let (dist, prev_edge): (Vec<_>, Vec<_>) = trees.into_iter().unzip();

        TransferGraph {
            stop_index,
            edges,
            adjacency,
            dist: dist.into_boxed_slice(),
            prev_edge: prev_edge.into_boxed_slice(),
        }
    }

    /// Finds the fastest itinerary between two stops, per the five-step
    /// algorithm: unknown endpoints and unreachable destinations both report
    /// [`RouteResult::NotFound`].
    pub fn find_route(&self, from: &str, to: &str) -> RouteResult {
        let Some(&i) = self.stop_index.get(from) else {
            return RouteResult::NotFound;
        };
        let Some(&j) = self.stop_index.get(to) else {
            return RouteResult::NotFound;
        };
        if i == j {
            return RouteResult::Found {
                total_time: 0.0,
                items: Vec::new(),
            };
        }

        let dist = &self.dist[i];
        let prev_edge = &self.prev_edge[i];

        let wait_j = wait_vertex(j);
        let board_j = board_vertex(j);
        let (finish, total_time) = if dist[board_j as usize] < dist[wait_j as usize] {
            (board_j, dist[board_j as usize])
        } else {
            (wait_j, dist[wait_j as usize])
        };

        if !total_time.is_finite() {
            return RouteResult::NotFound;
        }

        let mut edge_path = Vec::new();
        let mut v = finish;
        let source = wait_vertex(i);
        while v != source {
            let edge_id = prev_edge[v as usize].expect("finite distance implies a settled predecessor edge");
            let edge = &self.edges[edge_id as usize];
            edge_path.push(edge);
            v = edge.from;
        }
        edge_path.reverse();

        let items = edge_path
            .into_iter()
            .map(|edge| match &edge.kind {
                EdgeKind::Wait { stop } => RouteItem::Wait {
                    stop: stop.clone(),
                    time: edge.weight,
                },
                EdgeKind::Ride { bus, span_count } => RouteItem::Ride {
                    bus: bus.clone(),
                    span_count: *span_count,
                    time: edge.weight,
                },
            })
            .collect();

        RouteResult::Found { total_time, items }
    }
}

/// Emits the O(n^2) ride edges for one directed walk of `route` (the stored
/// forward route, or its reverse for a linear bus's return leg): for every
/// `i < j`, one edge `B(route[i]) -> W(route[j])` weighted by the summed
/// road distance of the intervening legs, walked in the same direction.
fn emit_ride_edges(
    catalogue: &Catalogue,
    bus: &Bus,
    route: &[Arc<str>],
    speed: f64,
    stop_index: &HashMap<Arc<str>, usize>,
    edges: &mut Vec<Edge>,
    adjacency: &mut [Vec<u32>],
) {
    let n = route.len();
    for i in 0..n {
        let mut accumulated = 0.0;
        let board_i = board_vertex(stop_index[&route[i]]);
        for j in (i + 1)..n {
            accumulated += catalogue.road_distance(&route[j - 1], &route[j]);
            let weight = accumulated / speed;
            let edge_id = edges.len() as u32;
            edges.push(Edge {
                from: board_i,
                to: wait_vertex(stop_index[&route[j]]),
                weight,
                kind: EdgeKind::Ride {
                    bus: bus.name.clone(),
                    span_count: (j - i) as u32,
                },
            });
            adjacency[board_i as usize].push(edge_id);
        }
    }
}
