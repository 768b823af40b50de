// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Box filtering and styling.
//!
//! [`compute_box_overlay`] turns raw detections into the ordered list of boxes
//! to draw, each with its resolved stroke color and optional label badge.

use serde::Serialize;

use crate::config::BoxOverlayConfig;
use crate::geometry::DetectionBox;
use crate::visualizer::{BoxColor, resolve_box_color};

/// Height of a label badge in pixels.
pub const LABEL_BADGE_HEIGHT: f64 = 24.0;
/// Distance from the badge top to the box top. Not clamped to the image.
pub const LABEL_BADGE_OFFSET: f64 = 28.0;
/// Approximate width of one label character in pixels.
pub const LABEL_CHAR_WIDTH: f64 = 8.0;
/// Horizontal badge padding when the confidence is shown.
pub const LABEL_PADDING_WITH_CONFIDENCE: f64 = 40.0;
/// Horizontal badge padding for the label alone.
pub const LABEL_PADDING: f64 = 16.0;

/// Label badge drawn above a box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelBadge {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// The detection label, case preserved.
    pub text: String,
    /// Rounded percentage such as `"87%"`, when confidence display is on.
    pub confidence_text: Option<String>,
}

impl LabelBadge {
    /// Compute the badge for a box.
    ///
    /// The width estimate counts UTF-16 code units, so a character outside the
    /// Basic Multilingual Plane (most emoji) takes two character widths.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn for_box(detection: &DetectionBox, show_confidence: bool) -> Self {
        let padding = if show_confidence {
            LABEL_PADDING_WITH_CONFIDENCE
        } else {
            LABEL_PADDING
        };
        let chars = detection.label.encode_utf16().count() as f64;

        Self {
            x: detection.x,
            y: detection.y - LABEL_BADGE_OFFSET,
            width: chars.mul_add(LABEL_CHAR_WIDTH, padding),
            height: LABEL_BADGE_HEIGHT,
            text: detection.label.clone(),
            confidence_text: show_confidence.then(|| format_confidence(detection.confidence)),
        }
    }

    /// Text shown inside the badge, e.g. `"person 95%"`.
    #[must_use]
    pub fn display_text(&self) -> String {
        match &self.confidence_text {
            Some(conf) => format!("{} {conf}", self.text),
            None => self.text.clone(),
        }
    }
}

/// One box ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxAnnotation {
    /// Position of the box in the input list.
    pub index: usize,
    pub detection: DetectionBox,
    pub stroke_color: BoxColor,
    /// Whether the host attached a click handler; interactive boxes react to hover.
    pub is_interactive: bool,
    pub label: Option<LabelBadge>,
}

/// Render-ready box overlay, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoxOverlay {
    pub annotations: Vec<BoxAnnotation>,
}

impl BoxOverlay {
    /// Number of boxes to draw.
    #[must_use]
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    /// `true` means nothing should be rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BoxAnnotation> {
        self.annotations.iter()
    }
}

impl<'a> IntoIterator for &'a BoxOverlay {
    type Item = &'a BoxAnnotation;
    type IntoIter = std::slice::Iter<'a, BoxAnnotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.annotations.iter()
    }
}

/// Format a confidence as a rounded percentage (`0.123` → `"12%"`).
///
/// Halves round toward positive infinity, so `0.125` → `"13%"` and a value
/// just below a half, such as `0.004999999999999999`, still rounds down.
#[must_use]
pub fn format_confidence(confidence: f64) -> String {
    format!("{}%", round_half_up(confidence * 100.0))
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Filter and style detection boxes.
///
/// A box is kept iff `confidence >= config.min_confidence`. Output order
/// matches input order. An empty box list or a non-positive image dimension
/// yields an empty overlay.
///
/// # Arguments
///
/// * `boxes` - Detections in pixel space.
/// * `image_width` - Natural image width in pixels.
/// * `image_height` - Natural image height in pixels.
/// * `config` - Threshold and label settings.
/// * `interactive` - Whether the host supplied a click handler.
///
/// # Returns
///
/// * The boxes to draw, possibly empty.
#[must_use]
pub fn compute_box_overlay(
    boxes: &[DetectionBox],
    image_width: f64,
    image_height: f64,
    config: &BoxOverlayConfig,
    interactive: bool,
) -> BoxOverlay {
    if boxes.is_empty() || !(image_width > 0.0) || !(image_height > 0.0) {
        return BoxOverlay::default();
    }

    let annotations = boxes
        .iter()
        .enumerate()
        .filter(|(_, b)| b.confidence >= config.min_confidence)
        .map(|(index, b)| BoxAnnotation {
            index,
            detection: b.clone(),
            stroke_color: resolve_box_color(&b.label, b.color.as_ref()),
            is_interactive: interactive,
            label: config
                .show_labels
                .then(|| LabelBadge::for_box(b, config.show_confidence)),
        })
        .collect();

    BoxOverlay { annotations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualizer::Color;

    fn sample_boxes() -> Vec<DetectionBox> {
        vec![
            DetectionBox::new(100.0, 100.0, 200.0, 300.0, "person", 0.95),
            DetectionBox::new(400.0, 200.0, 150.0, 100.0, "car", 0.87),
            DetectionBox::new(50.0, 50.0, 80.0, 80.0, "dog", 0.72),
        ]
    }

    #[test]
    fn test_threshold_filters_boxes() {
        let config = BoxOverlayConfig::new().with_min_confidence(0.8);
        let overlay = compute_box_overlay(&sample_boxes(), 1920.0, 1080.0, &config, false);

        assert_eq!(overlay.len(), 2);
        assert_eq!(overlay.annotations[0].detection.label, "person");
        assert_eq!(overlay.annotations[0].stroke_color.to_string(), "#ef4444");
        assert_eq!(overlay.annotations[1].detection.label, "car");
        assert_eq!(overlay.annotations[1].stroke_color.to_string(), "#3b82f6");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let config = BoxOverlayConfig::new().with_min_confidence(0.72);
        let overlay = compute_box_overlay(&sample_boxes(), 640.0, 480.0, &config, false);
        assert_eq!(overlay.len(), 3);
    }

    #[test]
    fn test_indices_refer_to_input_positions() {
        let config = BoxOverlayConfig::new().with_min_confidence(0.9);
        let mut boxes = sample_boxes();
        boxes.reverse();
        let overlay = compute_box_overlay(&boxes, 640.0, 480.0, &config, false);
        assert_eq!(overlay.len(), 1);
        assert_eq!(overlay.annotations[0].index, 2);
    }

    #[test]
    fn test_empty_and_degenerate_inputs() {
        let config = BoxOverlayConfig::default();
        assert!(compute_box_overlay(&[], 640.0, 480.0, &config, false).is_empty());
        assert!(compute_box_overlay(&sample_boxes(), 0.0, 480.0, &config, false).is_empty());
        assert!(compute_box_overlay(&sample_boxes(), 640.0, -1.0, &config, false).is_empty());
        assert!(compute_box_overlay(&sample_boxes(), f64::NAN, 480.0, &config, false).is_empty());
    }

    #[test]
    fn test_degenerate_box_sizes_pass_through() {
        let boxes = [DetectionBox::new(-10.0, 5.0, 0.0, -4.0, "cat", 0.5)];
        let overlay = compute_box_overlay(&boxes, 640.0, 480.0, &BoxOverlayConfig::default(), false);
        assert_eq!(overlay.len(), 1);
        assert_eq!(overlay.annotations[0].detection.width, 0.0);
        assert_eq!(overlay.annotations[0].detection.height, -4.0);
    }

    #[test]
    fn test_color_override_wins() {
        let boxes = [DetectionBox::new(0.0, 0.0, 1.0, 1.0, "person", 0.9).with_color(Color::EMERALD)];
        let overlay = compute_box_overlay(&boxes, 10.0, 10.0, &BoxOverlayConfig::default(), false);
        assert_eq!(overlay.annotations[0].stroke_color, BoxColor::Rgb(Color::EMERALD));
    }

    #[test]
    fn test_named_color_override_passes_through() {
        let boxes = [
            DetectionBox::new(0.0, 0.0, 1.0, 1.0, "person", 0.9).with_color(BoxColor::parse("red")),
            DetectionBox::new(0.0, 0.0, 1.0, 1.0, "dog", 0.9),
        ];
        let overlay = compute_box_overlay(&boxes, 10.0, 10.0, &BoxOverlayConfig::default(), false);
        assert_eq!(overlay.len(), 2);
        assert_eq!(overlay.annotations[0].stroke_color.to_string(), "red");
        assert_eq!(overlay.annotations[1].stroke_color, BoxColor::Rgb(Color::AMBER));
    }

    #[test]
    fn test_label_badge_geometry() {
        let b = DetectionBox::new(100.0, 10.0, 50.0, 50.0, "person", 0.95);

        let badge = LabelBadge::for_box(&b, true);
        assert_eq!(badge.x, 100.0);
        assert_eq!(badge.y, -18.0);
        assert_eq!(badge.height, 24.0);
        assert_eq!(badge.width, 6.0 * 8.0 + 40.0);
        assert_eq!(badge.display_text(), "person 95%");

        let badge = LabelBadge::for_box(&b, false);
        assert_eq!(badge.width, 6.0 * 8.0 + 16.0);
        assert_eq!(badge.confidence_text, None);
        assert_eq!(badge.display_text(), "person");
    }

    #[test]
    fn test_label_badge_counts_utf16_units() {
        let b = DetectionBox::new(0.0, 0.0, 10.0, 10.0, "🐕 dog", 0.9);
        assert_eq!(LabelBadge::for_box(&b, false).width, 6.0 * 8.0 + 16.0);

        let b = DetectionBox::new(0.0, 0.0, 10.0, 10.0, "café", 0.9);
        assert_eq!(LabelBadge::for_box(&b, false).width, 4.0 * 8.0 + 16.0);
    }

    #[test]
    fn test_labels_hidden() {
        let config = BoxOverlayConfig::new().with_show_labels(false);
        let overlay = compute_box_overlay(&sample_boxes(), 640.0, 480.0, &config, true);
        assert!(overlay.iter().all(|a| a.label.is_none() && a.is_interactive));
    }

    #[test]
    fn test_format_confidence_rounds() {
        assert_eq!(format_confidence(0.123), "12%");
        assert_eq!(format_confidence(0.999), "100%");
        assert_eq!(format_confidence(0.5), "50%");
        assert_eq!(format_confidence(0.0), "0%");
        assert_eq!(format_confidence(1.0), "100%");
        assert_eq!(format_confidence(0.125), "13%");
    }

    #[test]
    fn test_format_confidence_just_below_half() {
        assert_eq!(format_confidence(0.004_999_999_999_999_999), "0%");
        assert_eq!(format_confidence(0.005), "1%");
        assert_eq!(format_confidence(-0.005), "0%");
    }
}
