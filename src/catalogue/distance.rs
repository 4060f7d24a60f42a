use std::collections::HashMap;
use std::sync::Arc;

/// Partial mapping from ordered stop-name pairs to positive real meters, with
/// symmetric fallback and a zero default for completely unknown pairs.
///
/// Nested by `from` so lookups borrow both keys as `&str` (`Arc<str>: Borrow<str>`)
/// instead of allocating a fresh `Arc<str>` per call — `get` sits on the ride-edge
/// construction hot path, called once per stop pair per bus.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    entries: HashMap<Arc<str>, HashMap<Arc<str>, f64>>,
}

impl DistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, from: Arc<str>, to: Arc<str>, meters: f64) {
        self.entries.entry(from).or_default().insert(to, meters);
    }

    /// `dist(a, b)`: the `(a, b)` entry if present, else the `(b, a)` entry
    /// (symmetric fallback), else `0.0`.
    pub fn get(&self, from: &str, to: &str) -> f64 {
        if let Some(&d) = self.entries.get(from).and_then(|row| row.get(to)) {
            return d;
        }
        if let Some(&d) = self.entries.get(to).and_then(|row| row.get(from)) {
            return d;
        }
        0.0
    }
}
