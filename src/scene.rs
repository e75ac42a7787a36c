//! Host capability seams
//!
//! The engine never touches a concrete scene-graph type. The host hands it
//! two narrow capabilities: [`Scene`] for element queries and position
//! writes, and [`Overlay`] for guide rendering. Both are borrowed per event,
//! so the engine holds no reference into the host between calls.

use crate::geometry::{Bounds, Point};
use crate::guides::Guide;

/// Opaque stable identity of a scene element, assigned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Scene-graph queries and position writes the engine depends on
///
/// All coordinates are global (page) coordinates. Query methods return
/// `None` for unknown identities; the engine treats absence as "no relation",
/// never as an error.
pub trait Scene {
    /// Identities of every element currently in the scene
    fn element_ids(&self) -> Vec<ElementId>;

    /// Axis-aligned content bounds of an element
    fn content_bounds(&self, id: ElementId) -> Option<Bounds>;

    /// The element's four actual (rotated) corner points
    ///
    /// Corner 0 must be the rotated image of the element's unrotated
    /// top-left corner, i.e. the corner its position anchor tracks.
    fn layout_corners(&self, id: ElementId) -> Option<[Point; 4]>;

    /// Current position anchor of an element
    fn position(&self, id: ElementId) -> Option<Point>;

    /// Move an element's position anchor
    ///
    /// Unknown identities are ignored.
    fn set_position(&mut self, id: ElementId, position: Point);
}

/// Sink for guide primitives on the host's overlay layer
pub trait Overlay {
    /// Remove every primitive previously pushed by the engine
    fn clear(&mut self);

    /// Add one primitive to the overlay
    fn push(&mut self, guide: Guide);
}
