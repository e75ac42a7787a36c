//! snapguide - smart-guide alignment and spacing engine for 2D editors
//!
//! While the user drags an element, the engine detects near-alignment with
//! other elements' edges and centers, plus near-equal spacing gaps, snaps
//! the dragged element onto the detected relation, and emits guide
//! descriptors (lines, two-headed arrows, labels, highlight bands) for the
//! host to render.
//!
//! The host supplies two capabilities: a [`Scene`] for element queries and
//! position writes, and an [`Overlay`] for guide primitives. The engine
//! keeps a [`BoundsIndex`] snapshot of every element's bounds, rebuilt on
//! drag end and zoom change, and re-runs both detectors synchronously on
//! every pointer move.
//!
//! # Example
//!
//! ```rust
//! use snapguide::{AlignmentOptions, SnapConfig, SpacingOptions};
//!
//! // Resolved once at construction; unset fields keep their defaults
//! let config = SnapConfig::new()
//!     .with_alignment(AlignmentOptions::new().with_tolerance(8.0))
//!     .with_spacing(SpacingOptions::new().with_preferred_gaps(vec![8.0, 16.0, 24.0]));
//! assert!(config.alignment.enabled);
//! assert_eq!(config.spacing.tolerance, 6.0);
//!
//! // Or from TOML, with the same fallback behavior
//! let config = SnapConfig::from_toml_str(
//!     r#"
//!     [alignment]
//!     tolerance = 8.0
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.alignment.tolerance, 8.0);
//! assert_eq!(config.spacing.preferred_gaps, vec![12.0, 32.0, 64.0, 128.0]);
//! ```
//!
//! With a [`Scene`] implementation in hand, drive the engine from the
//! host's event handlers:
//!
//! ```rust,ignore
//! let mut engine = GuideEngine::new(&scene, config);
//! // on drag move:
//! engine.pointer_moved(&mut scene, &mut overlay, dragged_id);
//! // on drag end:
//! engine.drag_ended(&scene, &mut overlay);
//! // on zoom change:
//! engine.zoom_changed(&scene);
//! ```

pub mod config;
pub mod detect;
pub mod engine;
pub mod geometry;
pub mod guides;
pub mod index;
pub mod scene;

pub use config::{AlignmentOptions, ConfigError, SnapConfig, SpacingOptions};
pub use detect::{AlignmentKind, GutterMatch, GutterSide, RelationMatch};
pub use engine::{GuideEngine, SessionState};
pub use geometry::{Axis, Bounds, Point, RotationOffsets};
pub use guides::{ArrowCap, GapArrow, GapBand, GapLabel, Guide, GuideLine, GUIDE_EXTENT};
pub use index::BoundsIndex;
pub use scene::{ElementId, Overlay, Scene};
