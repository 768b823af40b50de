// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pose keypoint filtering and skeleton building.
//!
//! [`compute_pose_overlay`] takes one COCO-17 pose in pixel space and returns
//! the bones and keypoints to draw. Bones always come before keypoints so the
//! keypoints sit on top.

use serde::Serialize;

use crate::config::PoseOverlayConfig;
use crate::geometry::{Keypoint, PixelKeypoint, to_pixel_keypoints};
use crate::visualizer::skeleton::KEYPOINT_BODY_PARTS;
use crate::visualizer::{BodyPart, Color, KEYPOINT_NAMES, NUM_KEYPOINTS, SKELETON, connection_color};

/// A keypoint ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoseKeypoint {
    pub index: usize,
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
    pub body_part: BodyPart,
    pub color: Color,
    /// Equal to the keypoint confidence.
    pub opacity: f64,
}

/// A skeleton bone ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoseConnection {
    pub from: usize,
    pub to: usize,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: Color,
    /// The lower of the two endpoint confidences.
    pub opacity: f64,
}

/// Render-ready pose overlay.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PoseOverlay {
    /// Bones in skeleton order.
    pub connections: Vec<PoseConnection>,
    /// Keypoints in index order.
    pub keypoints: Vec<PoseKeypoint>,
}

impl PoseOverlay {
    /// `true` means nothing should be rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty() && self.keypoints.is_empty()
    }
}

/// Which of the 17 keypoints clear the threshold.
///
/// Indices missing from `keypoints` are invalid; entries past index 16 are
/// ignored.
#[must_use]
pub fn valid_keypoints(keypoints: &[PixelKeypoint], min_confidence: f64) -> [bool; NUM_KEYPOINTS] {
    std::array::from_fn(|i| {
        keypoints
            .get(i)
            .is_some_and(|kp| kp.confidence() >= min_confidence)
    })
}

/// Filter a pose and build its skeleton.
///
/// Returns an empty overlay when the overlay is hidden, an image dimension is
/// not positive, there is no pose data, or no keypoint clears the threshold.
/// A bone is kept only when both of its endpoints are valid.
///
/// # Arguments
///
/// * `keypoints` - Pixel-space keypoints in COCO order, or `None` for no pose.
/// * `image_width` - Natural image width in pixels.
/// * `image_height` - Natural image height in pixels.
/// * `config` - Threshold, toggles and drawing sizes.
///
/// # Returns
///
/// * The bones and keypoints to draw, possibly empty.
#[must_use]
pub fn compute_pose_overlay(
    keypoints: Option<&[PixelKeypoint]>,
    image_width: f64,
    image_height: f64,
    config: &PoseOverlayConfig,
) -> PoseOverlay {
    let Some(keypoints) = keypoints.filter(|kps| !kps.is_empty()) else {
        return PoseOverlay::default();
    };
    if !config.visible || !(image_width > 0.0) || !(image_height > 0.0) {
        return PoseOverlay::default();
    }

    let valid = valid_keypoints(keypoints, config.min_confidence);
    if !valid.contains(&true) {
        return PoseOverlay::default();
    }

    let connections = if config.show_connections {
        SKELETON
            .iter()
            .filter(|[a, b]| valid[*a] && valid[*b])
            .map(|&[a, b]| {
                let (from, to) = (keypoints[a], keypoints[b]);
                PoseConnection {
                    from: a,
                    to: b,
                    x1: from.x(),
                    y1: from.y(),
                    x2: to.x(),
                    y2: to.y(),
                    color: connection_color(
                        KEYPOINT_BODY_PARTS[a],
                        KEYPOINT_BODY_PARTS[b],
                    ),
                    opacity: from.confidence().min(to.confidence()),
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    let keypoints = if config.show_keypoints {
        (0..NUM_KEYPOINTS)
            .filter(|&i| valid[i])
            .map(|i| {
                let kp = keypoints[i];
                let body_part = KEYPOINT_BODY_PARTS[i];
                PoseKeypoint {
                    index: i,
                    name: KEYPOINT_NAMES[i],
                    x: kp.x(),
                    y: kp.y(),
                    body_part,
                    color: body_part.color(),
                    opacity: kp.confidence(),
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    PoseOverlay {
        connections,
        keypoints,
    }
}

/// Build a pose overlay from normalized keypoints.
///
/// The keypoints are converted to pixel space with the image size first.
#[must_use]
pub fn compute_pose_overlay_normalized(
    keypoints: Option<&[Keypoint]>,
    image_width: f64,
    image_height: f64,
    config: &PoseOverlayConfig,
) -> PoseOverlay {
    let pixels = keypoints.map(|kps| to_pixel_keypoints(kps, image_width, image_height));
    compute_pose_overlay(pixels.as_deref(), image_width, image_height, config)
}
