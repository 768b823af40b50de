// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Color tables and skeleton topology shared by the overlays.

/// Color definitions and label dispatch.
pub mod color;

/// COCO-17 skeleton topology and body-part colors.
pub mod skeleton;

pub use color::{BoxColor, Color, ObjectClass, resolve_box_color};
pub use skeleton::{BodyPart, KEYPOINT_NAMES, NUM_KEYPOINTS, SKELETON, connection_color};
