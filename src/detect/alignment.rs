//! Edge and center alignment detection
//!
//! Tests the drag target against each candidate for coincidence across 14
//! relation kinds. A match records the candidate coordinate the target
//! should snap to; the correction math turns that into a new anchor
//! position, compensated for rotation so the *visual* bounding box lands on
//! the guide.

use crate::config::AlignmentOptions;
use crate::geometry::{Axis, Bounds, RotationOffsets};
use crate::guides::GuideLine;

/// The 14 alignment relation kinds
///
/// The four `TargetCenter*` kinds test the target's center against a
/// candidate edge only; the inverse (candidate center against target edge)
/// is intentionally not tested. That asymmetry is part of the observed
/// behavior and is preserved, not fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentKind {
    /// Left edges coincide
    Left,
    /// Right edges coincide
    Right,
    /// Top edges coincide
    Top,
    /// Bottom edges coincide
    Bottom,
    /// Horizontal centers coincide
    CenterX,
    /// Vertical centers coincide
    CenterY,
    /// Target's left edge touches the candidate's right edge
    LeftOverlap,
    /// Target's right edge touches the candidate's left edge
    RightOverlap,
    /// Target's bottom edge touches the candidate's top edge
    TopOverlap,
    /// Target's top edge touches the candidate's bottom edge
    BottomOverlap,
    /// Target's vertical center crosses the candidate's top edge
    TargetCenterYTop,
    /// Target's vertical center crosses the candidate's bottom edge
    TargetCenterYBottom,
    /// Target's horizontal center crosses the candidate's left edge
    TargetCenterXLeft,
    /// Target's horizontal center crosses the candidate's right edge
    TargetCenterXRight,
}

impl AlignmentKind {
    /// The guide axis this kind snaps on
    pub fn axis(self) -> Axis {
        match self {
            Self::Top
            | Self::Bottom
            | Self::CenterY
            | Self::TopOverlap
            | Self::BottomOverlap
            | Self::TargetCenterYTop
            | Self::TargetCenterYBottom => Axis::Row,
            Self::Left
            | Self::Right
            | Self::CenterX
            | Self::LeftOverlap
            | Self::RightOverlap
            | Self::TargetCenterXLeft
            | Self::TargetCenterXRight => Axis::Column,
        }
    }
}

/// A detected coincidence between the target and one candidate
///
/// `value` is the global coordinate the guide line is drawn at and the
/// target snaps to: a y for `Axis::Row`, an x for `Axis::Column`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelationMatch {
    pub kind: AlignmentKind,
    pub axis: Axis,
    pub value: f64,
}

impl RelationMatch {
    fn new(kind: AlignmentKind, value: f64) -> Self {
        Self {
            kind,
            axis: kind.axis(),
            value,
        }
    }

    /// The guide line descriptor for this match
    pub fn guide_line(&self, options: &AlignmentOptions) -> GuideLine {
        GuideLine {
            axis: self.axis,
            value: self.value,
            stroke: options.stroke.clone(),
            stroke_width: options.stroke_width,
        }
    }
}

/// Test the target against every candidate for all 14 relation kinds
///
/// Matches are returned in candidate order, kinds in a fixed order per
/// candidate. Every match within tolerance is reported; the caller applies
/// them all, so for conflicting kinds on the same axis the last one wins.
pub fn detect(target: &Bounds, candidates: &[Bounds], tolerance: f64) -> Vec<RelationMatch> {
    let mut matches = Vec::new();

    for c in candidates {
        let mut check = |kind: AlignmentKind, a: f64, b: f64, value: f64| {
            if (a - b).abs() <= tolerance {
                matches.push(RelationMatch::new(kind, value));
            }
        };

        check(AlignmentKind::Left, c.x, target.x, c.x);
        check(AlignmentKind::Right, c.x1, target.x1, c.x1);
        check(AlignmentKind::Top, c.y, target.y, c.y);
        check(AlignmentKind::Bottom, c.y1, target.y1, c.y1);
        check(AlignmentKind::CenterX, c.center_x, target.center_x, c.center_x);
        check(AlignmentKind::CenterY, c.center_y, target.center_y, c.center_y);

        check(AlignmentKind::RightOverlap, c.x, target.x1, c.x);
        check(AlignmentKind::LeftOverlap, c.x1, target.x, c.x1);
        check(AlignmentKind::TopOverlap, c.y, target.y1, c.y);
        check(AlignmentKind::BottomOverlap, c.y1, target.y, c.y1);

        check(AlignmentKind::TargetCenterYTop, target.center_y, c.y, c.y);
        check(
            AlignmentKind::TargetCenterYBottom,
            target.center_y,
            c.y1,
            c.y1,
        );
        check(AlignmentKind::TargetCenterXLeft, target.center_x, c.x, c.x);
        check(
            AlignmentKind::TargetCenterXRight,
            target.center_x,
            c.x1,
            c.x1,
        );
    }

    matches
}

/// New anchor coordinate on the match axis after snapping
///
/// Moves the anchor so the target's bounding-box edge or center reaches
/// `value` exactly. `target` supplies the current visual width/height;
/// `offsets` re-expresses the visual position as an anchor position for
/// rotated elements (all-zero offsets leave the math untouched).
pub fn corrected_anchor(m: &RelationMatch, target: &Bounds, offsets: &RotationOffsets) -> f64 {
    let w = target.width();
    let h = target.height();
    match m.kind {
        AlignmentKind::Top | AlignmentKind::BottomOverlap => m.value + offsets.dy_min,
        AlignmentKind::Bottom | AlignmentKind::TopOverlap => m.value - h + offsets.dy_min,
        AlignmentKind::CenterY
        | AlignmentKind::TargetCenterYTop
        | AlignmentKind::TargetCenterYBottom => m.value - h / 2.0 + offsets.dy_min,
        AlignmentKind::Left | AlignmentKind::LeftOverlap => m.value + offsets.dx_min,
        AlignmentKind::Right | AlignmentKind::RightOverlap => m.value - w + offsets.dx_min,
        AlignmentKind::CenterX
        | AlignmentKind::TargetCenterXLeft
        | AlignmentKind::TargetCenterXRight => m.value - w / 2.0 + offsets.dx_min,
    }
}
