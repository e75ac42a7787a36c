//! Snapshot index of element bounds
//!
//! The index is the only shared state between events. It is rebuilt
//! wholesale at Idle transitions (construction, drag end, zoom change) and
//! read-only while dragging, so detectors always see a full, consistent
//! snapshot rather than the dragged element's live mid-drag position.

use std::collections::HashMap;

use log::trace;

use crate::geometry::Bounds;
use crate::scene::{ElementId, Scene};

/// Mapping from element identity to its bounds summary at last rebuild
#[derive(Debug, Default)]
pub struct BoundsIndex {
    entries: HashMap<ElementId, Bounds>,
}

impl BoundsIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive a summary for every element and replace the map atomically
    ///
    /// Elements whose bounds the scene cannot supply are skipped. No partial
    /// state is ever visible: the new map is built completely before the old
    /// one is dropped.
    pub fn rebuild(&mut self, scene: &impl Scene) {
        let ids = scene.element_ids();
        let mut entries = HashMap::with_capacity(ids.len());
        for id in ids {
            if let Some(bounds) = scene.content_bounds(id) {
                entries.insert(id, bounds);
            }
        }
        trace!("bounds index rebuilt with {} entries", entries.len());
        self.entries = entries;
    }

    /// Bounds summary for an element, or `None` for unknown identity
    pub fn get(&self, id: ElementId) -> Option<Bounds> {
        self.entries.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `min(n, len)` entries nearest to `target` by center distance
    ///
    /// `exclude` (the drag target) is never returned. Results are sorted by
    /// non-decreasing center-to-center distance; exact ties fall back to map
    /// iteration order and are therefore non-deterministic, which is
    /// acceptable since tied candidates yield identical guides. The scan is
    /// O(len log len) per call.
    pub fn nearest(&self, n: usize, target: &Bounds, exclude: ElementId) -> Vec<Bounds> {
        let mut by_distance: Vec<(f64, Bounds)> = self
            .entries
            .iter()
            .filter(|(id, _)| **id != exclude)
            .map(|(_, bounds)| (target.center_distance(bounds), *bounds))
            .collect();
        by_distance.sort_by(|a, b| a.0.total_cmp(&b.0));
        by_distance.truncate(n);
        trace!(
            "selected {} of {} candidates for snapping",
            by_distance.len(),
            self.entries.len()
        );
        by_distance.into_iter().map(|(_, bounds)| bounds).collect()
    }
}
