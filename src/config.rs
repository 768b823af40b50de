// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Overlay configuration.
//!
//! This module defines [`BoxOverlayConfig`] and [`PoseOverlayConfig`], the
//! per-call display parameters for the two overlay kinds. Both use a builder
//! pattern and deserialize from partial JSON, filling gaps from the defaults.

use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, Result};

/// Default minimum confidence for boxes (every box is shown).
pub const DEFAULT_BOX_MIN_CONFIDENCE: f64 = 0.0;
/// Default minimum confidence for pose keypoints.
pub const DEFAULT_POSE_MIN_CONFIDENCE: f64 = 0.3;
/// Default keypoint circle radius in pixels.
pub const DEFAULT_KEYPOINT_RADIUS: f64 = 4.0;
/// Default bone line width in pixels.
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;

/// Configuration for the box overlay.
///
/// # Example
///
/// ```rust
/// use detection_overlay::BoxOverlayConfig;
///
/// let config = BoxOverlayConfig::new()
///     .with_min_confidence(0.5)
///     .with_show_confidence(false);
/// assert!(config.show_labels);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxOverlayConfig {
    /// Boxes with confidence below this value are dropped (inclusive threshold).
    pub min_confidence: f64,
    /// Whether to compute a label badge above each box.
    pub show_labels: bool,
    /// Whether the label badge includes the confidence percentage.
    pub show_confidence: bool,
}

impl Default for BoxOverlayConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_BOX_MIN_CONFIDENCE,
            show_labels: true,
            show_confidence: true,
        }
    }
}

impl BoxOverlayConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum confidence threshold.
    ///
    /// # Arguments
    ///
    /// * `threshold` - Boxes scoring at or above this value are kept.
    #[must_use]
    pub const fn with_min_confidence(mut self, threshold: f64) -> Self {
        self.min_confidence = threshold;
        self
    }

    /// Enable or disable label badges.
    #[must_use]
    pub const fn with_show_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    /// Enable or disable the confidence percentage inside label badges.
    #[must_use]
    pub const fn with_show_confidence(mut self, show: bool) -> Self {
        self.show_confidence = show;
        self
    }

    /// Check the configuration for values the CLI should refuse.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::ConfigError`] for a non-finite threshold.
    pub fn validate(&self) -> Result<()> {
        if !self.min_confidence.is_finite() {
            return Err(OverlayError::ConfigError(format!(
                "min_confidence must be finite, got {}",
                self.min_confidence
            )));
        }
        Ok(())
    }
}

/// Configuration for the pose overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseOverlayConfig {
    /// Keypoints with confidence below this value are invalid (inclusive threshold).
    pub min_confidence: f64,
    /// Master switch; `false` yields an empty overlay.
    pub visible: bool,
    /// Whether keypoint circles are emitted.
    pub show_keypoints: bool,
    /// Whether skeleton bones are emitted.
    pub show_connections: bool,
    /// Keypoint circle radius in pixels.
    pub keypoint_radius: f64,
    /// Bone line width in pixels.
    pub line_width: f64,
}

impl Default for PoseOverlayConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_POSE_MIN_CONFIDENCE,
            visible: true,
            show_keypoints: true,
            show_connections: true,
            keypoint_radius: DEFAULT_KEYPOINT_RADIUS,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl PoseOverlayConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum keypoint confidence.
    #[must_use]
    pub const fn with_min_confidence(mut self, threshold: f64) -> Self {
        self.min_confidence = threshold;
        self
    }

    /// Show or hide the whole pose overlay.
    #[must_use]
    pub const fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Show or hide keypoint circles.
    #[must_use]
    pub const fn with_show_keypoints(mut self, show: bool) -> Self {
        self.show_keypoints = show;
        self
    }

    /// Show or hide skeleton bones.
    #[must_use]
    pub const fn with_show_connections(mut self, show: bool) -> Self {
        self.show_connections = show;
        self
    }

    /// Set the keypoint circle radius.
    #[must_use]
    pub const fn with_keypoint_radius(mut self, radius: f64) -> Self {
        self.keypoint_radius = radius;
        self
    }

    /// Set the bone line width.
    #[must_use]
    pub const fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    /// Check the configuration for values the CLI should refuse.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::ConfigError`] for a non-finite threshold or a
    /// non-positive radius or line width.
    pub fn validate(&self) -> Result<()> {
        if !self.min_confidence.is_finite() {
            return Err(OverlayError::ConfigError(format!(
                "min_confidence must be finite, got {}",
                self.min_confidence
            )));
        }
        if !(self.keypoint_radius > 0.0) {
            return Err(OverlayError::ConfigError(format!(
                "keypoint_radius must be positive, got {}",
                self.keypoint_radius
            )));
        }
        if !(self.line_width > 0.0) {
            return Err(OverlayError::ConfigError(format!(
                "line_width must be positive, got {}",
                self.line_width
            )));
        }
        Ok(())
    }
}
