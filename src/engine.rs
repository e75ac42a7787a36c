//! Session controller
//!
//! Owns the resolved configuration, the bounds index, and the drag/zoom
//! state machine. Every handler runs synchronously inside the host's event
//! dispatch and is self-contained, so it is safe to invoke at pointer
//! sampling rate: each move clears the previous guides and supersedes them
//! with freshly detected ones.

use log::debug;

use crate::config::{AlignmentOptions, SnapConfig, SpacingOptions};
use crate::detect::{alignment, spacing};
use crate::geometry::{Axis, Point, RotationOffsets};
use crate::guides::Guide;
use crate::index::BoundsIndex;
use crate::scene::{ElementId, Overlay, Scene};

/// Where the engine sits in the drag/zoom lifecycle
///
/// `Dragging` and `Zooming` are mutually exclusive; both return to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Dragging,
    Zooming,
}

/// The smart-guide engine
///
/// Construct one per editing surface, then forward the host's drag-move,
/// drag-end, and zoom-change notifications to [`pointer_moved`],
/// [`drag_ended`], and [`zoom_changed`].
///
/// [`pointer_moved`]: GuideEngine::pointer_moved
/// [`drag_ended`]: GuideEngine::drag_ended
/// [`zoom_changed`]: GuideEngine::zoom_changed
#[derive(Debug)]
pub struct GuideEngine {
    alignment: AlignmentOptions,
    spacing: SpacingOptions,
    index: BoundsIndex,
    state: SessionState,
}

impl GuideEngine {
    /// Create an engine and build the initial bounds index
    ///
    /// Never fails: configuration is already resolved and an empty scene
    /// simply yields an empty index.
    pub fn new(scene: &impl Scene, config: SnapConfig) -> Self {
        let mut index = BoundsIndex::new();
        index.rebuild(scene);
        Self {
            alignment: config.alignment,
            spacing: config.spacing,
            index,
            state: SessionState::Idle,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The resolved alignment options
    pub fn alignment(&self) -> &AlignmentOptions {
        &self.alignment
    }

    /// The resolved spacing options
    pub fn spacing(&self) -> &SpacingOptions {
        &self.spacing
    }

    /// The current index snapshot (read-only)
    pub fn index(&self) -> &BoundsIndex {
        &self.index
    }

    /// Toggle alignment detection without reconstructing the engine
    pub fn set_alignment_enabled(&mut self, enabled: bool) {
        self.alignment.enabled = enabled;
    }

    /// Toggle spacing detection without reconstructing the engine
    pub fn set_spacing_enabled(&mut self, enabled: bool) {
        self.spacing.enabled = enabled;
    }

    /// Handle one drag-move event for `target`
    ///
    /// Clears previously emitted guides, then runs the spacing detector and
    /// the alignment detector (each only if enabled) against the index
    /// snapshot. Every match snaps the target via [`Scene::set_position`]
    /// and pushes its descriptors onto the overlay; on conflicting
    /// corrections for the same axis the last match wins. The dragged
    /// element's own (stale) index entry is excluded by identity.
    pub fn pointer_moved(
        &mut self,
        scene: &mut impl Scene,
        overlay: &mut impl Overlay,
        target: ElementId,
    ) {
        self.state = SessionState::Dragging;
        overlay.clear();
        if self.spacing.enabled {
            self.run_spacing(scene, overlay, target);
        }
        if self.alignment.enabled {
            self.run_alignment(scene, overlay, target);
        }
    }

    /// Handle the end of a drag
    ///
    /// Clears the guides and rebuilds the index so the next drag sees the
    /// element's settled position.
    pub fn drag_ended(&mut self, scene: &impl Scene, overlay: &mut impl Overlay) {
        overlay.clear();
        self.index.rebuild(scene);
        self.state = SessionState::Idle;
    }

    /// Handle a viewport zoom change
    ///
    /// Rebuilds the index for the new page-coordinate bounds. Tolerances
    /// and label sizes are not rescaled with the zoom level; that is a
    /// known limitation of the observed behavior, kept as-is.
    pub fn zoom_changed(&mut self, scene: &impl Scene) {
        self.state = SessionState::Zooming;
        self.index.rebuild(scene);
        self.state = SessionState::Idle;
    }

    fn run_spacing(
        &mut self,
        scene: &mut impl Scene,
        overlay: &mut impl Overlay,
        target: ElementId,
    ) {
        let Some(bounds) = scene.content_bounds(target) else {
            return;
        };
        let offsets = corner_offsets(scene, target);
        let candidates = self
            .index
            .nearest(self.spacing.candidate_count, &bounds, target);
        let matches = spacing::detect(
            &bounds,
            &candidates,
            &self.spacing.preferred_gaps,
            self.spacing.tolerance,
        );
        if !matches.is_empty() {
            debug!("{} spacing match(es) for {:?}", matches.len(), target);
        }

        for m in &matches {
            let corrected = spacing::corrected_anchor(m, &offsets);
            // Row gutters run along x, column gutters along y
            match m.axis {
                Axis::Row => move_anchor_x(scene, target, corrected),
                Axis::Column => move_anchor_y(scene, target, corrected),
            }
            overlay.push(Guide::Arrow(m.arrow(&self.spacing)));
            overlay.push(Guide::Label(m.label(&self.spacing)));
            if self.spacing.show_background {
                overlay.push(Guide::Band(m.band(&self.spacing)));
            }
        }
    }

    fn run_alignment(
        &mut self,
        scene: &mut impl Scene,
        overlay: &mut impl Overlay,
        target: ElementId,
    ) {
        // Re-query: the spacing pass may already have moved the target
        let Some(bounds) = scene.content_bounds(target) else {
            return;
        };
        let offsets = corner_offsets(scene, target);
        let candidates = self
            .index
            .nearest(self.alignment.candidate_count, &bounds, target);
        let matches = alignment::detect(&bounds, &candidates, self.alignment.tolerance);
        if !matches.is_empty() {
            debug!("{} alignment match(es) for {:?}", matches.len(), target);
        }

        for m in &matches {
            let corrected = alignment::corrected_anchor(m, &bounds, &offsets);
            // Row relations share a y, column relations share an x
            match m.axis {
                Axis::Row => move_anchor_y(scene, target, corrected),
                Axis::Column => move_anchor_x(scene, target, corrected),
            }
            overlay.push(Guide::Line(m.guide_line(&self.alignment)));
        }
    }
}

fn corner_offsets(scene: &impl Scene, target: ElementId) -> RotationOffsets {
    scene
        .layout_corners(target)
        .map(|corners| RotationOffsets::from_corners(&corners))
        .unwrap_or_default()
}

fn move_anchor_x(scene: &mut impl Scene, target: ElementId, x: f64) {
    if let Some(position) = scene.position(target) {
        scene.set_position(target, Point::new(x, position.y));
    }
}

fn move_anchor_y(scene: &mut impl Scene, target: ElementId, y: f64) {
    if let Some(position) = scene.position(target) {
        scene.set_position(target, Point::new(position.x, y));
    }
}
