// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Detection and keypoint value types.
//!
//! Keypoints are kept normalized ([`Keypoint`], `[0, 1]` image space) and only
//! become pixel-space tuples ([`PixelKeypoint`]) through [`to_pixel_space`].

use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, Result};
use crate::visualizer::BoxColor;

/// A detected object region in pixel space.
///
/// Coordinates are not clamped to the image and extents are not validated;
/// negative or zero sizes pass through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionBox {
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Display label. Color lookup ignores case.
    pub label: String,
    /// Detection confidence, nominally in `[0, 1]`.
    pub confidence: f64,
    /// Explicit stroke color, overriding the label palette. Any string is
    /// accepted; non-hex values are passed through to the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<BoxColor>,
}

impl DetectionBox {
    /// Create a new box without a color override.
    #[must_use]
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        label: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: label.into(),
            confidence,
            color: None,
        }
    }

    /// Set an explicit stroke color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<BoxColor>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A keypoint in normalized `[0, 1]` image space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f64,
    pub y: f64,
    pub confidence: f64,
}

impl Keypoint {
    #[must_use]
    pub const fn new(x: f64, y: f64, confidence: f64) -> Self {
        Self { x, y, confidence }
    }
}

/// A keypoint in pixel space, serialized as `[x, y, confidence]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelKeypoint(pub f64, pub f64, pub f64);

impl PixelKeypoint {
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.0
    }

    #[must_use]
    pub const fn y(&self) -> f64 {
        self.1
    }

    #[must_use]
    pub const fn confidence(&self) -> f64 {
        self.2
    }
}

/// Convert a normalized keypoint to pixel space.
///
/// Coordinates are multiplied by the image size without rounding; confidence
/// is carried over unchanged.
#[must_use]
pub fn to_pixel_space(keypoint: &Keypoint, width: f64, height: f64) -> PixelKeypoint {
    PixelKeypoint(keypoint.x * width, keypoint.y * height, keypoint.confidence)
}

/// Convert a whole pose to pixel space, preserving keypoint order.
#[must_use]
pub fn to_pixel_keypoints(keypoints: &[Keypoint], width: f64, height: f64) -> Vec<PixelKeypoint> {
    keypoints
        .iter()
        .map(|kp| to_pixel_space(kp, width, height))
        .collect()
}

/// Validate raw keypoint rows before they reach the pose overlay.
///
/// Every row must be an `[x, y, confidence]` triple. The keypoint count is not
/// checked here: the pose overlay treats missing indices as invalid.
///
/// # Errors
///
/// Returns [`OverlayError::InvalidKeypoints`] naming the first malformed row.
pub fn validate_keypoints(raw: &[Vec<f64>]) -> Result<Vec<PixelKeypoint>> {
    raw.iter()
        .enumerate()
        .map(|(i, row)| match row.as_slice() {
            &[x, y, confidence] => Ok(PixelKeypoint(x, y, confidence)),
            other => Err(OverlayError::InvalidKeypoints(format!(
                "keypoint {i} has {} values, expected 3 (x, y, confidence)",
                other.len()
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualizer::Color;

    #[test]
    fn test_to_pixel_space_is_exact() {
        let kp = Keypoint::new(0.25, 0.5, 0.9);
        let px = to_pixel_space(&kp, 640.0, 480.0);
        assert_eq!(px, PixelKeypoint(160.0, 240.0, 0.9));
    }

    #[test]
    fn test_to_pixel_space_does_not_round() {
        let px = to_pixel_space(&Keypoint::new(0.333, 0.1, 0.5), 100.0, 10.0);
        assert!((px.x() - 33.3).abs() < 1e-9);
        assert!((px.y() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_to_pixel_keypoints_preserves_order() {
        let kps = [Keypoint::new(0.0, 0.0, 0.1), Keypoint::new(1.0, 1.0, 0.2)];
        let px = to_pixel_keypoints(&kps, 10.0, 20.0);
        assert_eq!(px, vec![PixelKeypoint(0.0, 0.0, 0.1), PixelKeypoint(10.0, 20.0, 0.2)]);
    }

    #[test]
    fn test_validate_keypoints() {
        let ok = validate_keypoints(&[vec![1.0, 2.0, 0.5], vec![3.0, 4.0, 0.6]]).unwrap();
        assert_eq!(ok.len(), 2);
        assert_eq!(ok[1].confidence(), 0.6);

        let err = validate_keypoints(&[vec![1.0, 2.0, 0.5], vec![3.0, 4.0]]).unwrap_err();
        assert!(err.to_string().contains("keypoint 1 has 2 values"));

        assert!(validate_keypoints(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_pixel_keypoint_serializes_as_tuple() {
        let json = serde_json::to_string(&PixelKeypoint(1.0, 2.0, 0.5)).unwrap();
        assert_eq!(json, "[1.0,2.0,0.5]");
    }

    #[test]
    fn test_detection_box_color_is_optional() {
        let b: DetectionBox = serde_json::from_str(
            r#"{"x":1,"y":2,"width":3,"height":4,"label":"cat","confidence":0.5}"#,
        )
        .unwrap();
        assert_eq!(b, DetectionBox::new(1.0, 2.0, 3.0, 4.0, "cat", 0.5));

        let b: DetectionBox = serde_json::from_str(
            r##"{"x":1,"y":2,"width":3,"height":4,"label":"cat","confidence":0.5,"color":"#00ff00"}"##,
        )
        .unwrap();
        assert_eq!(b.color, Some(BoxColor::Rgb(Color::new(0, 255, 0))));
    }

    #[test]
    fn test_unparsed_color_keeps_the_rest_of_the_list() {
        let boxes: Vec<DetectionBox> = serde_json::from_str(
            r#"[
                {"x":1,"y":2,"width":3,"height":4,"label":"person","confidence":0.9},
                {"x":5,"y":6,"width":7,"height":8,"label":"cat","confidence":0.5,"color":"red"}
            ]"#,
        )
        .unwrap();
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].color, None);
        assert_eq!(boxes[1].color, Some(BoxColor::Css("red".into())));
    }
}
