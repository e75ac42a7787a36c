//! Engine configuration
//!
//! Two independent option groups (alignment and spacing), each with
//! documented defaults. Options can be built in code via the `with_*`
//! builders or loaded from TOML, where any missing field or group falls
//! back to its default. Construction never fails; only explicit TOML
//! loading can return an error.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::guides::ArrowCap;

const DEFAULT_COLOR: &str = "rgb(255,0,0)";
const DEFAULT_BACKGROUND_COLOR: &str = "rgba(255,156,156,0.16)";
const DEFAULT_CANDIDATE_COUNT: usize = 5;

/// Errors that can occur when loading configuration from TOML
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Options for edge/center alignment detection
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AlignmentOptions {
    /// Whether alignment snapping runs at all (default `true`)
    pub enabled: bool,
    /// How many nearest elements are tested per move (default 5)
    pub candidate_count: usize,
    /// Max pixel distance counted as a coincidence (default 10)
    pub tolerance: f64,
    /// Guide line color (default red)
    pub stroke: String,
    /// Guide line width (default 1)
    pub stroke_width: f64,
}

impl Default for AlignmentOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            candidate_count: DEFAULT_CANDIDATE_COUNT,
            tolerance: 10.0,
            stroke: DEFAULT_COLOR.to_string(),
            stroke_width: 1.0,
        }
    }
}

impl AlignmentOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable alignment detection
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the number of nearest candidates tested per move
    pub fn with_candidate_count(mut self, count: usize) -> Self {
        self.candidate_count = count;
        self
    }

    /// Set the coincidence tolerance in pixels
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the guide line stroke color
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    /// Set the guide line stroke width
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }
}

/// Options for preferred-gap spacing detection
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpacingOptions {
    /// Whether spacing snapping runs at all (default `true`)
    pub enabled: bool,
    /// How many nearest elements are tested per move (default 5)
    pub candidate_count: usize,
    /// Max pixel distance counted as a gap match (default 6)
    pub tolerance: f64,
    /// The "nice" gap distances matched against (default `[12, 32, 64, 128]`)
    pub preferred_gaps: Vec<f64>,
    /// Arrow color (default red)
    pub stroke: String,
    /// Arrow line width (default 2)
    pub stroke_width: f64,
    /// Cap style at the arrow start (default mark)
    pub start_cap: ArrowCap,
    /// Cap style at the arrow end (default mark)
    pub end_cap: ArrowCap,
    /// Gap label text color (default red)
    pub label_color: String,
    /// Gap label font size (default 12)
    pub font_size: f64,
    /// Whether the translucent gap band is drawn (default `true`)
    pub show_background: bool,
    /// Gap band fill color (default translucent red)
    pub background_color: String,
}

impl Default for SpacingOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            candidate_count: DEFAULT_CANDIDATE_COUNT,
            tolerance: 6.0,
            preferred_gaps: vec![12.0, 32.0, 64.0, 128.0],
            stroke: DEFAULT_COLOR.to_string(),
            stroke_width: 2.0,
            start_cap: ArrowCap::Mark,
            end_cap: ArrowCap::Mark,
            label_color: DEFAULT_COLOR.to_string(),
            font_size: 12.0,
            show_background: true,
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

impl SpacingOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable spacing detection
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the number of nearest candidates tested per move
    pub fn with_candidate_count(mut self, count: usize) -> Self {
        self.candidate_count = count;
        self
    }

    /// Set the gap-match tolerance in pixels
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the preferred gap distances
    pub fn with_preferred_gaps(mut self, gaps: Vec<f64>) -> Self {
        self.preferred_gaps = gaps;
        self
    }

    /// Set the arrow stroke color
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    /// Set the gap label color and font size
    pub fn with_label(mut self, color: impl Into<String>, font_size: f64) -> Self {
        self.label_color = color.into();
        self.font_size = font_size;
        self
    }

    /// Enable or disable the gap background band
    pub fn with_background(mut self, show: bool) -> Self {
        self.show_background = show;
        self
    }
}

/// Complete engine configuration: both option groups
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    pub alignment: AlignmentOptions,
    pub spacing: SpacingOptions,
}

impl SnapConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alignment option group
    pub fn with_alignment(mut self, alignment: AlignmentOptions) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the spacing option group
    pub fn with_spacing(mut self, spacing: SpacingOptions) -> Self {
        self.spacing = spacing;
        self
    }

    /// Load configuration from a TOML string
    ///
    /// Missing fields and whole missing groups fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
