//! Guide descriptors handed to the host overlay
//!
//! The engine never draws anything itself. Each detected relation produces
//! one or more of these value types, which the host renders onto its overlay
//! layer and discards on the next pointer move.

use serde::Deserialize;

use crate::geometry::{Axis, Point};

/// Half-extent of canvas-spanning primitives (guide lines and gap bands)
///
/// Lines and bands run from `-GUIDE_EXTENT` to `+GUIDE_EXTENT` on their free
/// axis so they visually cross the whole canvas at any practical zoom level.
pub const GUIDE_EXTENT: f64 = 10_000.0;

/// Cap style for the ends of a spacing arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowCap {
    /// Short perpendicular tick (measurement-style)
    #[default]
    Mark,
    /// Filled triangle head
    Triangle,
    /// Bare line end
    None,
}

/// A full-canvas alignment guide line
///
/// `value` is the shared coordinate: a y for `Axis::Row` (horizontal line),
/// an x for `Axis::Column` (vertical line). The line sits at `value` on its
/// fixed axis and spans `±GUIDE_EXTENT` on the free axis.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideLine {
    pub axis: Axis,
    pub value: f64,
    pub stroke: String,
    pub stroke_width: f64,
}

/// A two-headed arrow spanning a matched gap
///
/// Starts at `start` and extends `length` along the axis: to the right for
/// `Axis::Row`, downward for `Axis::Column`.
#[derive(Debug, Clone, PartialEq)]
pub struct GapArrow {
    pub axis: Axis,
    pub start: Point,
    pub length: f64,
    pub stroke: String,
    pub stroke_width: f64,
    pub start_cap: ArrowCap,
    pub end_cap: ArrowCap,
}

/// A text label showing the numeric gap value next to its arrow
#[derive(Debug, Clone, PartialEq)]
pub struct GapLabel {
    pub text: String,
    pub position: Point,
    pub color: String,
    pub font_size: f64,
}

/// A translucent band highlighting the full gap region across the canvas
///
/// Covers `start..start + length` on the gap axis and `±GUIDE_EXTENT` on the
/// free axis.
#[derive(Debug, Clone, PartialEq)]
pub struct GapBand {
    pub axis: Axis,
    pub start: f64,
    pub length: f64,
    pub fill: String,
}

/// Any primitive the engine asks the overlay to draw
#[derive(Debug, Clone, PartialEq)]
pub enum Guide {
    Line(GuideLine),
    Arrow(GapArrow),
    Label(GapLabel),
    Band(GapBand),
}
