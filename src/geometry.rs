//! Geometric value types shared by the detectors

/// A 2D point in global (page) coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Guide axis: `Row` relations share a y coordinate and draw horizontal
/// guides, `Column` relations share an x coordinate and draw vertical guides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

/// Axis-aligned bounds summary of an element in global coordinates
///
/// `x`/`y` are the left/top edges, `x1`/`y1` the right/bottom edges. The
/// center is derived once at construction so detectors never recompute it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub x1: f64,
    pub y1: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl Bounds {
    /// Build a summary from a position and size rect
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            x1: x + width,
            y1: y + height,
            center_x: x + width / 2.0,
            center_y: y + height / 2.0,
        }
    }

    /// Build a summary from left/top/right/bottom edges
    pub fn from_edges(x: f64, y: f64, x1: f64, y1: f64) -> Self {
        Self {
            x,
            y,
            x1,
            y1,
            center_x: (x + x1) / 2.0,
            center_y: (y + y1) / 2.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y
    }

    /// Center point of the bounds
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Euclidean center-to-center distance to another bounds summary
    pub fn center_distance(&self, other: &Bounds) -> f64 {
        (other.center_x - self.center_x).hypot(other.center_y - self.center_y)
    }
}

/// Offsets between an element's reference corner and its visual extents
///
/// For a rotated element the position anchor no longer coincides with the
/// top-left of the visual (axis-aligned) bounding box. These four scalars
/// measure how far the reference corner (`corners[0]`, the rotated image of
/// the unrotated top-left) sits from the min/max corner coordinates, so a
/// correction can land the *visible* box on a guide rather than the anchor.
/// All four are zero for an unrotated element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationOffsets {
    /// `corners[0].x - min(x)` over all corners
    pub dx_min: f64,
    /// `corners[0].y - min(y)` over all corners
    pub dy_min: f64,
    /// `max(x) - corners[0].x` over all corners
    pub dx_max: f64,
    /// `max(y) - corners[0].y` over all corners
    pub dy_max: f64,
}

impl RotationOffsets {
    /// Compute offsets from an element's actual (rotated) corner points
    pub fn from_corners(corners: &[Point; 4]) -> Self {
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

        Self {
            dx_min: corners[0].x - min_x,
            dy_min: corners[0].y - min_y,
            dx_max: max_x - corners[0].x,
            dy_max: max_y - corners[0].y,
        }
    }
}
