//! Shared mock host for the integration suites
//!
//! `MockScene` models elements the way the engine's host does: a position
//! anchor at the unrotated top-left corner, a size, and a clockwise rotation
//! applied around the anchor. Content bounds are the axis-aligned box of the
//! rotated corners, so rotated elements exercise the offset-corrected snap
//! math end to end.

#![allow(dead_code)]

use snapguide::{Bounds, ElementId, Guide, Overlay, Point, Scene};

pub struct MockElement {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees, clockwise, around the anchor
    pub rotation: f64,
}

impl MockElement {
    /// The four actual corner points; corner 0 is the anchor itself
    pub fn corners(&self) -> [Point; 4] {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let rotate = |dx: f64, dy: f64| {
            Point::new(
                self.x + dx * cos - dy * sin,
                self.y + dx * sin + dy * cos,
            )
        };
        [
            rotate(0.0, 0.0),
            rotate(self.width, 0.0),
            rotate(self.width, self.height),
            rotate(0.0, self.height),
        ]
    }

    pub fn content_bounds(&self) -> Bounds {
        let corners = self.corners();
        let min_x = corners.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = corners
            .iter()
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max);
        let min_y = corners.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = corners
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max);
        Bounds::from_edges(min_x, min_y, max_x, max_y)
    }
}

#[derive(Default)]
pub struct MockScene {
    pub elements: Vec<MockElement>,
}

impl MockScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: u64, x: f64, y: f64, width: f64, height: f64) -> ElementId {
        self.add_rotated(id, x, y, width, height, 0.0)
    }

    pub fn add_rotated(
        &mut self,
        id: u64,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rotation: f64,
    ) -> ElementId {
        let id = ElementId(id);
        self.elements.push(MockElement {
            id,
            x,
            y,
            width,
            height,
            rotation,
        });
        id
    }

    pub fn element(&self, id: ElementId) -> &MockElement {
        self.elements
            .iter()
            .find(|e| e.id == id)
            .expect("element present in mock scene")
    }

    pub fn bounds(&self, id: ElementId) -> Bounds {
        self.element(id).content_bounds()
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut MockElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }
}

impl Scene for MockScene {
    fn element_ids(&self) -> Vec<ElementId> {
        self.elements.iter().map(|e| e.id).collect()
    }

    fn content_bounds(&self, id: ElementId) -> Option<Bounds> {
        self.elements
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.content_bounds())
    }

    fn layout_corners(&self, id: ElementId) -> Option<[Point; 4]> {
        self.elements
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.corners())
    }

    fn position(&self, id: ElementId) -> Option<Point> {
        self.elements
            .iter()
            .find(|e| e.id == id)
            .map(|e| Point::new(e.x, e.y))
    }

    fn set_position(&mut self, id: ElementId, position: Point) {
        if let Some(e) = self.element_mut(id) {
            e.x = position.x;
            e.y = position.y;
        }
    }
}

/// Overlay that records everything the engine pushes
#[derive(Default)]
pub struct RecordingOverlay {
    pub guides: Vec<Guide>,
    pub clears: usize,
}

impl RecordingOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<&snapguide::GuideLine> {
        self.guides
            .iter()
            .filter_map(|g| match g {
                Guide::Line(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    pub fn arrows(&self) -> Vec<&snapguide::GapArrow> {
        self.guides
            .iter()
            .filter_map(|g| match g {
                Guide::Arrow(arrow) => Some(arrow),
                _ => None,
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<&snapguide::GapLabel> {
        self.guides
            .iter()
            .filter_map(|g| match g {
                Guide::Label(label) => Some(label),
                _ => None,
            })
            .collect()
    }

    pub fn bands(&self) -> Vec<&snapguide::GapBand> {
        self.guides
            .iter()
            .filter_map(|g| match g {
                Guide::Band(band) => Some(band),
                _ => None,
            })
            .collect()
    }
}

impl Overlay for RecordingOverlay {
    fn clear(&mut self) {
        self.guides.clear();
        self.clears += 1;
    }

    fn push(&mut self, guide: Guide) {
        self.guides.push(guide);
    }
}
