//! Relation detectors
//!
//! Both detectors are pure: they take the target's live bounds and a slice
//! of candidate bounds from the index snapshot, and return ephemeral match
//! values. Applying corrections and emitting guides is the session
//! controller's job.

pub mod alignment;
pub mod spacing;

pub use alignment::{AlignmentKind, RelationMatch};
pub use spacing::{GutterMatch, GutterSide};
