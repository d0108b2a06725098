//! Edge ID generation.

use std::sync::atomic::{AtomicU64, Ordering};

use oqgraph_core::EdgeId;

/// A monotonic edge ID generator.
///
/// IDs start from 1 (0 is reserved for "no ID") and only ever increase, which
/// is what lets the store and the adjacency index order edges by insertion
/// simply by ordering their ids.
///
/// # Example
///
/// ```
/// use oqgraph_graph::store::IdGenerator;
///
/// let gen = IdGenerator::new();
/// let id1 = gen.next_edge_id();
/// let id2 = gen.next_edge_id();
/// assert!(id1 < id2);
/// assert!(id1.is_some());
/// ```
#[derive(Debug)]
pub struct IdGenerator {
    /// The next edge ID to assign.
    next_edge_id: AtomicU64,
}

impl IdGenerator {
    /// Create a new ID generator starting from 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next_edge_id: AtomicU64::new(1) }
    }

    /// Generate the next edge ID.
    ///
    /// Returns `None` once the ID space is exhausted. `u64::MAX` is never
    /// handed out, so the counter can always point one past the last ID.
    pub fn next_edge_id(&self) -> Option<EdgeId> {
        self.next_edge_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| id.checked_add(1))
            .ok()
            .map(EdgeId::new)
    }

    /// Make sure `id` is never handed out again.
    ///
    /// Used when edges with explicit IDs are loaded into a store. Observing
    /// `u64::MAX` exhausts the generator.
    pub fn observe(&self, id: EdgeId) {
        self.next_edge_id.fetch_max(id.as_u64().saturating_add(1), Ordering::Relaxed);
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next(gen: &IdGenerator) -> u64 {
        gen.next_edge_id().expect("id available").as_u64()
    }

    #[test]
    fn new_generator_starts_at_one() {
        let gen = IdGenerator::new();
        assert_eq!(next(&gen), 1);
    }

    #[test]
    fn ids_are_monotonically_increasing() {
        let gen = IdGenerator::new();
        let ids: Vec<_> = (0..100).map(|_| next(&gen)).collect();
        for window in ids.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn observe_skips_past_loaded_ids() {
        let gen = IdGenerator::new();
        gen.observe(EdgeId::new(41));

        // Observing an older id never moves the counter backwards.
        gen.observe(EdgeId::new(3));
        assert_eq!(next(&gen), 42);
    }

    #[test]
    fn last_id_exhausts_generator() {
        let gen = IdGenerator::new();
        gen.observe(EdgeId::new(u64::MAX - 2));
        assert_eq!(next(&gen), u64::MAX - 1);
        assert_eq!(gen.next_edge_id(), None);
        assert_eq!(gen.next_edge_id(), None);

        let restored = IdGenerator::new();
        restored.observe(EdgeId::new(u64::MAX));
        assert_eq!(restored.next_edge_id(), None);
    }
}
