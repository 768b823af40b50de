// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Detection Overlay
//!
//! Pure computation engine that decides what to draw over a camera frame for
//! object detections and human poses: which boxes and keypoints survive the
//! confidence threshold, what color each one gets, where label badges go, and
//! whether a re-render is needed at all.
//!
//! Nothing here touches pixels. The output is a render-ready list that a host
//! renderer maps one to one onto rectangles, lines, circles and text.
//!
//! ## Quick Start (Boxes)
//!
//! ```rust
//! use detection_overlay::{BoxOverlayConfig, DetectionBox, compute_box_overlay};
//!
//! let boxes = vec![
//!     DetectionBox::new(100.0, 100.0, 200.0, 300.0, "person", 0.95),
//!     DetectionBox::new(400.0, 200.0, 150.0, 100.0, "car", 0.87),
//!     DetectionBox::new(50.0, 50.0, 80.0, 80.0, "dog", 0.72),
//! ];
//! let config = BoxOverlayConfig::new().with_min_confidence(0.8);
//!
//! let overlay = compute_box_overlay(&boxes, 1920.0, 1080.0, &config, false);
//! assert_eq!(overlay.len(), 2);
//! assert_eq!(overlay.annotations[0].stroke_color.to_string(), "#ef4444");
//! assert_eq!(overlay.annotations[1].stroke_color.to_string(), "#3b82f6");
//! ```
//!
//! ## Quick Start (Pose)
//!
//! ```rust
//! use detection_overlay::{PixelKeypoint, PoseOverlayConfig, compute_pose_overlay};
//!
//! let keypoints = vec![PixelKeypoint(320.0, 240.0, 0.9); 17];
//! let overlay =
//!     compute_pose_overlay(Some(keypoints.as_slice()), 640.0, 480.0, &PoseOverlayConfig::default());
//!
//! assert_eq!(overlay.connections.len(), 16);
//! assert_eq!(overlay.keypoints.len(), 17);
//! ```
//!
//! ## Skipping Recomputation
//!
//! ```rust
//! use detection_overlay::{BoxOverlayInputs, DetectionBox, OverlayMemo};
//!
//! let boxes = vec![DetectionBox::new(0.0, 0.0, 10.0, 10.0, "cat", 0.9)];
//! let mut memo = OverlayMemo::new();
//!
//! let (_, fresh) = memo.get(BoxOverlayInputs::new(boxes.clone(), 640.0, 480.0));
//! assert!(fresh);
//! let (_, fresh) = memo.get(BoxOverlayInputs::new(boxes, 640.0, 480.0));
//! assert!(!fresh);
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Box overlay from a JSON list of detections
//! detection-overlay boxes --input detections.json --width 1920 --height 1080 --conf 0.8
//!
//! # Pose overlay as drawable primitives, image size read from the frame
//! detection-overlay pose --input keypoints.json --image frame.jpg --primitives
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`geometry`] | [`DetectionBox`], [`Keypoint`], [`PixelKeypoint`] and pixel conversion |
//! | [`visualizer`] | Colors, label classes and COCO skeleton topology |
//! | [`config`] | [`BoxOverlayConfig`] and [`PoseOverlayConfig`] |
//! | [`boxes`] | Box filter and stylist ([`compute_box_overlay`]) |
//! | [`pose`] | Pose filter and skeleton builder ([`compute_pose_overlay`]) |
//! | [`hover`] | Hover state for interactive boxes |
//! | [`compare`] | Input snapshots and [`overlay_inputs_equal`] |
//! | [`memo`] | [`OverlayMemo`] recompute gate |
//! | [`render`] | Drawable [`Primitive`]s |
//! | [`error`] | Error types ([`OverlayError`], [`Result`]) |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `image` | Read image dimensions from image files in the CLI (default) |

// Modules
pub mod boxes;
pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod memo;
pub mod pose;
pub mod render;
pub mod visualizer;

// Re-export main types for convenience
pub use boxes::{BoxAnnotation, BoxOverlay, LabelBadge, compute_box_overlay, format_confidence};
pub use compare::{
    BoxOverlayInputs, ClickHandler, OverlayInputs, PoseOverlayInputs, box_inputs_equal,
    overlay_inputs_equal, pose_inputs_equal,
};
pub use config::{BoxOverlayConfig, PoseOverlayConfig};
pub use error::{OverlayError, Result};
pub use geometry::{
    DetectionBox, Keypoint, PixelKeypoint, to_pixel_keypoints, to_pixel_space, validate_keypoints,
};
pub use hover::{HoverState, HoverTracker, PointerEvent};
pub use memo::{OverlayMemo, OverlayStage};
pub use pose::{
    PoseConnection, PoseKeypoint, PoseOverlay, compute_pose_overlay,
    compute_pose_overlay_normalized,
};
pub use render::{Primitive, box_primitives, pose_primitives};
pub use visualizer::{BodyPart, BoxColor, Color, ObjectClass};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "detection-overlay");
    }
}
