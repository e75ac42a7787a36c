//! Preferred-gap spacing detection
//!
//! For each candidate and each configured "nice" gap distance, tests four
//! directional hypotheses about where the target sits relative to the
//! candidate. A match pins down where the spacing arrow starts and which
//! edge of the target must land exactly one gap away.

use crate::config::SpacingOptions;
use crate::geometry::{Axis, Bounds, Point, RotationOffsets};
use crate::guides::{GapArrow, GapBand, GapLabel, GUIDE_EXTENT};

/// Which side of the candidate the matched gap sits on, from the target's
/// point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GutterSide {
    /// Target sits left of the candidate; gap between target.right and
    /// candidate.left
    Left,
    /// Target sits right of the candidate; gap between candidate.right and
    /// target.left
    Right,
    /// Target sits above the candidate; gap between target.bottom and
    /// candidate.top
    Top,
    /// Target sits below the candidate; gap between candidate.bottom and
    /// target.top
    Bottom,
}

/// A detected spacing coincidence
///
/// `anchor` is the coordinate where the spacing arrow starts (x for
/// `Axis::Row`, y for `Axis::Column`); the arrow spans `gap` from there.
/// `mid` is the cross-axis coordinate the arrow is drawn at, which is the
/// target's center on the other axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GutterMatch {
    pub gap: f64,
    pub side: GutterSide,
    pub axis: Axis,
    pub anchor: f64,
    pub mid: f64,
}

impl GutterMatch {
    /// The two-headed arrow spanning the gap
    pub fn arrow(&self, options: &SpacingOptions) -> GapArrow {
        let start = match self.axis {
            Axis::Row => Point::new(self.anchor, self.mid),
            Axis::Column => Point::new(self.mid, self.anchor),
        };
        GapArrow {
            axis: self.axis,
            start,
            length: self.gap,
            stroke: options.stroke.clone(),
            stroke_width: options.stroke_width,
            start_cap: options.start_cap,
            end_cap: options.end_cap,
        }
    }

    /// The numeric label next to the arrow
    ///
    /// Row labels sit centered over the arrow midpoint; column labels are
    /// nudged right by one font size and vertically centered on the gap,
    /// matching the observed overlay layout.
    pub fn label(&self, options: &SpacingOptions) -> GapLabel {
        let position = match self.axis {
            Axis::Row => Point::new(self.anchor + self.gap / 2.0, self.mid),
            Axis::Column => Point::new(
                self.mid + options.font_size,
                self.anchor + self.gap / 2.0 - (options.font_size * 1.5) / 2.0,
            ),
        };
        GapLabel {
            // f64 Display renders integral gaps without a trailing ".0"
            text: format!("{}", self.gap),
            position,
            color: options.label_color.clone(),
            font_size: options.font_size,
        }
    }

    /// The translucent band marking the gap region across the canvas
    pub fn band(&self, options: &SpacingOptions) -> GapBand {
        GapBand {
            axis: self.axis,
            start: self.anchor,
            length: self.gap,
            fill: options.background_color.clone(),
        }
    }

    /// Full-canvas extent of the band on its free axis, for hosts that need
    /// concrete rectangle geometry
    pub fn band_free_extent(&self) -> (f64, f64) {
        (-GUIDE_EXTENT, GUIDE_EXTENT)
    }
}

/// Test the target against every candidate and every preferred gap
///
/// Matches are returned in candidate order, gaps in configured order, sides
/// in a fixed left/right/top/bottom order per gap. Every hypothesis within
/// tolerance is reported; the caller applies them all in order.
pub fn detect(
    target: &Bounds,
    candidates: &[Bounds],
    gaps: &[f64],
    tolerance: f64,
) -> Vec<GutterMatch> {
    let mut matches = Vec::new();

    for c in candidates {
        for &gap in gaps {
            // Target left of candidate: candidate.left - target.right ~= gap
            if (c.x - target.x1 - gap).abs() <= tolerance {
                matches.push(GutterMatch {
                    gap,
                    side: GutterSide::Left,
                    axis: Axis::Row,
                    anchor: c.x - gap,
                    mid: target.center_y,
                });
            }
            // Target right of candidate: target.left - candidate.right ~= gap
            if (target.x - c.x1 - gap).abs() <= tolerance {
                matches.push(GutterMatch {
                    gap,
                    side: GutterSide::Right,
                    axis: Axis::Row,
                    anchor: c.x1,
                    mid: target.center_y,
                });
            }
            // Target above candidate: candidate.top - target.bottom ~= gap
            if (c.y - target.y1 - gap).abs() <= tolerance {
                matches.push(GutterMatch {
                    gap,
                    side: GutterSide::Top,
                    axis: Axis::Column,
                    anchor: c.y - gap,
                    mid: target.center_x,
                });
            }
            // Target below candidate: target.top - candidate.bottom ~= gap
            if (target.y - c.y1 - gap).abs() <= tolerance {
                matches.push(GutterMatch {
                    gap,
                    side: GutterSide::Bottom,
                    axis: Axis::Column,
                    anchor: c.y1,
                    mid: target.center_x,
                });
            }
        }
    }

    matches
}

/// New anchor coordinate on the gap axis after snapping
///
/// Lands the target's near *visual* edge exactly on the gap boundary:
/// for `Left`/`Top` the far edge of the target meets the arrow start, for
/// `Right`/`Bottom` the near edge sits one gap past the candidate.
pub fn corrected_anchor(m: &GutterMatch, offsets: &RotationOffsets) -> f64 {
    match m.side {
        GutterSide::Left => m.anchor - offsets.dx_max,
        GutterSide::Right => m.anchor + m.gap + offsets.dx_min,
        GutterSide::Top => m.anchor - offsets.dy_max,
        GutterSide::Bottom => m.anchor + m.gap + offsets.dy_min,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Bounds {
        Bounds::from_rect(x, y, w, h)
    }

    #[test]
    fn test_left_gap_of_ten() {
        // Target (0,0)-(100,100), candidate (110,0)-(210,100), gaps [10]:
        // actual gap is exactly 10
        let target = rect(0.0, 0.0, 100.0, 100.0);
        let candidate = rect(110.0, 0.0, 100.0, 100.0);
        let matches = detect(&target, &[candidate], &[10.0], 6.0);

        assert_eq!(matches.len(), 1);
        let m = matches[0];
        assert_eq!(m.side, GutterSide::Left);
        assert_eq!(m.gap, 10.0);
        assert_eq!(m.axis, Axis::Row);
        assert_eq!(m.anchor, 100.0);
        assert_eq!(m.mid, 50.0);

        // Correction puts the target's right edge at candidate.left - gap,
        // i.e. anchor x becomes 100 - width = 0 for an unrotated element
        let offsets = RotationOffsets {
            dx_max: target.width(),
            ..RotationOffsets::default()
        };
        assert_eq!(corrected_anchor(&m, &offsets), 0.0);
    }

    #[test]
    fn test_right_side_gap() {
        // Candidate right edge at 50, target left edge at 81: gap ~= 32
        let target = rect(81.0, 0.0, 60.0, 40.0);
        let candidate = rect(0.0, 0.0, 50.0, 40.0);
        let matches = detect(&target, &[candidate], &[32.0], 6.0);

        assert_eq!(matches.len(), 1);
        let m = matches[0];
        assert_eq!(m.side, GutterSide::Right);
        assert_eq!(m.anchor, 50.0);
        assert_eq!(m.mid, 20.0);

        // Snap moves the left edge to exactly candidate.right + gap
        assert_eq!(
            corrected_anchor(&m, &RotationOffsets::default()),
            82.0
        );
    }

    #[test]
    fn test_vertical_gaps() {
        // Target above: candidate.top 150, target.bottom 88, gap 64 off by 2
        let target = rect(0.0, 48.0, 40.0, 40.0);
        let candidate = rect(0.0, 150.0, 40.0, 40.0);
        let matches = detect(&target, &[candidate], &[64.0], 6.0);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].side, GutterSide::Top);
        assert_eq!(matches[0].axis, Axis::Column);
        assert_eq!(matches[0].anchor, 150.0 - 64.0);
        assert_eq!(matches[0].mid, 20.0);

        // Target below: target.top 202, candidate.bottom 190, gap 12
        let target = rect(0.0, 202.0, 40.0, 40.0);
        let matches = detect(&target, &[candidate], &[12.0], 6.0);
        assert_eq!(matches.len(), 1);
        let m = matches[0];
        assert_eq!(m.side, GutterSide::Bottom);
        assert_eq!(m.anchor, 190.0);
        assert_eq!(corrected_anchor(&m, &RotationOffsets::default()), 202.0);
    }

    #[test]
    fn test_tolerance_boundary_inclusive() {
        // Actual gap 16, preferred 10, tolerance 6: difference exactly 6
        let target = rect(0.0, 0.0, 100.0, 100.0);
        let candidate = rect(116.0, 0.0, 100.0, 100.0);

        assert_eq!(detect(&target, &[candidate], &[10.0], 6.0).len(), 1);
        assert!(detect(&target, &[candidate], &[10.0], 5.999).is_empty());
    }

    #[test]
    fn test_multiple_gaps_can_match() {
        // Actual gap 20 sits within tolerance 6 of both 16 and 24, so both
        // preferred gaps produce a match
        let target = rect(0.0, 0.0, 100.0, 100.0);
        let candidate = rect(120.0, 0.0, 100.0, 100.0);
        let matches = detect(&target, &[candidate], &[16.0, 24.0], 6.0);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].gap, 16.0);
        assert_eq!(matches[1].gap, 24.0);
        // Both are Left-side matches with different arrow anchors
        assert_eq!(matches[0].anchor, 120.0 - 16.0);
        assert_eq!(matches[1].anchor, 120.0 - 24.0);
    }

    #[test]
    fn test_rotated_corrections() {
        let offsets = RotationOffsets {
            dx_min: 15.0,
            dy_min: 10.0,
            dx_max: 85.0,
            dy_max: 90.0,
        };
        let m = GutterMatch {
            gap: 32.0,
            side: GutterSide::Left,
            axis: Axis::Row,
            anchor: 200.0,
            mid: 0.0,
        };
        // Anchor sits dx_max left of the visual right edge
        assert_eq!(corrected_anchor(&m, &offsets), 115.0);

        let m = GutterMatch {
            side: GutterSide::Bottom,
            axis: Axis::Column,
            anchor: 300.0,
            ..m
        };
        assert_eq!(corrected_anchor(&m, &offsets), 342.0);
    }

    #[test]
    fn test_arrow_and_band_descriptors() {
        let options = SpacingOptions::default();
        let m = GutterMatch {
            gap: 12.0,
            side: GutterSide::Left,
            axis: Axis::Row,
            anchor: 88.0,
            mid: 50.0,
        };

        let arrow = m.arrow(&options);
        assert_eq!(arrow.start, Point::new(88.0, 50.0));
        assert_eq!(arrow.length, 12.0);

        let band = m.band(&options);
        assert_eq!(band.start, 88.0);
        assert_eq!(band.length, 12.0);
        assert_eq!(band.fill, "rgba(255,156,156,0.16)");
        assert_eq!(m.band_free_extent(), (-GUIDE_EXTENT, GUIDE_EXTENT));

        // Column arrows swap the anchor onto the y coordinate
        let m = GutterMatch {
            axis: Axis::Column,
            side: GutterSide::Top,
            ..m
        };
        let arrow = m.arrow(&options);
        assert_eq!(arrow.start, Point::new(50.0, 88.0));
    }

    #[test]
    fn test_label_text_is_decimal_string() {
        let options = SpacingOptions::default();
        let mut m = GutterMatch {
            gap: 12.0,
            side: GutterSide::Left,
            axis: Axis::Row,
            anchor: 0.0,
            mid: 0.0,
        };
        assert_eq!(m.label(&options).text, "12");

        m.gap = 12.5;
        assert_eq!(m.label(&options).text, "12.5");
    }

    #[test]
    fn test_label_positions() {
        let options = SpacingOptions::default(); // font_size 12
        let m = GutterMatch {
            gap: 32.0,
            side: GutterSide::Left,
            axis: Axis::Row,
            anchor: 100.0,
            mid: 40.0,
        };
        let label = m.label(&options);
        assert_eq!(label.position, Point::new(116.0, 40.0));

        let m = GutterMatch {
            axis: Axis::Column,
            side: GutterSide::Top,
            ..m
        };
        let label = m.label(&options);
        assert_eq!(label.position, Point::new(52.0, 100.0 + 16.0 - 9.0));
    }

    #[test]
    fn test_no_candidates_no_matches() {
        let target = rect(0.0, 0.0, 100.0, 100.0);
        assert!(detect(&target, &[], &[12.0, 32.0], 6.0).is_empty());
    }
}
