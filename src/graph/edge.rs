use std::sync::Arc;

/// What kind of passenger transition an edge represents, and the fields that
/// are only meaningful for that kind.
///
/// Modeled as a sum type (not a shared base struct with unused fields or a
/// trait-object hierarchy) so a `Wait` edge simply cannot carry a dangling
/// `span_count`.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeKind {
    /// Boarding delay paid once at a stop before riding.
    Wait { stop: Arc<str> },
    /// Riding a bus over `span_count` consecutive segments without alighting.
    Ride { bus: Arc<str>, span_count: u32 },
}

/// One directed edge in the transfer graph. `from`/`to` are dense vertex
/// indices (`2*stop_index` for wait, `2*stop_index + 1` for board).
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: u32,
    pub to: u32,
    pub weight: f64,
    pub kind: EdgeKind,
}
