// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Drawable primitives.
//!
//! The host renderer draws these one to one as rectangles, lines, circles and
//! text, without further decisions of its own.

use serde::Serialize;

use crate::boxes::BoxOverlay;
use crate::config::PoseOverlayConfig;
use crate::hover::HoverTracker;
use crate::pose::PoseOverlay;
use crate::visualizer::{BoxColor, Color};

/// Horizontal inset of badge text from the badge's left edge.
pub const LABEL_TEXT_INSET_X: f64 = 4.0;
/// Baseline of badge text below the badge's top edge.
pub const LABEL_TEXT_BASELINE: f64 = 16.0;

/// A drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// Axis-aligned rectangle, stroked or filled.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: BoxColor,
        stroke_width: f64,
        filled: bool,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        width: f64,
        opacity: f64,
    },
    /// Filled circle.
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: Color,
        opacity: f64,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        color: Color,
    },
}

/// Lay out a box overlay as primitives.
///
/// Each box yields its outline, then its badge and badge text when labels are
/// on. Outline width comes from the hover tracker, indexed by overlay position.
#[must_use]
pub fn box_primitives(overlay: &BoxOverlay, hover: &HoverTracker) -> Vec<Primitive> {
    let mut primitives = Vec::with_capacity(overlay.len() * 3);

    for (slot, annotation) in overlay.iter().enumerate() {
        let b = &annotation.detection;
        primitives.push(Primitive::Rect {
            x: b.x,
            y: b.y,
            width: b.width,
            height: b.height,
            color: annotation.stroke_color.clone(),
            stroke_width: hover.stroke_width(slot),
            filled: false,
        });

        if let Some(badge) = &annotation.label {
            primitives.push(Primitive::Rect {
                x: badge.x,
                y: badge.y,
                width: badge.width,
                height: badge.height,
                color: annotation.stroke_color.clone(),
                stroke_width: 0.0,
                filled: true,
            });
            primitives.push(Primitive::Text {
                x: badge.x + LABEL_TEXT_INSET_X,
                y: badge.y + LABEL_TEXT_BASELINE,
                content: badge.display_text(),
                color: Color::WHITE,
            });
        }
    }

    primitives
}

/// Lay out a pose overlay as primitives: every bone, then every keypoint.
#[must_use]
pub fn pose_primitives(overlay: &PoseOverlay, config: &PoseOverlayConfig) -> Vec<Primitive> {
    let bones = overlay.connections.iter().map(|c| Primitive::Line {
        x1: c.x1,
        y1: c.y1,
        x2: c.x2,
        y2: c.y2,
        color: c.color,
        width: config.line_width,
        opacity: c.opacity,
    });
    let joints = overlay.keypoints.iter().map(|k| Primitive::Circle {
        cx: k.x,
        cy: k.y,
        radius: config.keypoint_radius,
        color: k.color,
        opacity: k.opacity,
    });

    bones.chain(joints).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxes::compute_box_overlay;
    use crate::config::BoxOverlayConfig;
    use crate::geometry::{DetectionBox, PixelKeypoint};
    use crate::pose::compute_pose_overlay;

    #[test]
    fn test_box_primitives_with_labels() {
        let boxes = [DetectionBox::new(10.0, 40.0, 20.0, 30.0, "car", 0.87)];
        let overlay = compute_box_overlay(&boxes, 100.0, 100.0, &BoxOverlayConfig::default(), true);
        let mut hover = HoverTracker::new();
        hover.sync(&overlay);

        let prims = box_primitives(&overlay, &hover);
        assert_eq!(prims.len(), 3);
        assert!(matches!(
            prims[0],
            Primitive::Rect { stroke_width, filled: false, .. } if stroke_width == 3.0
        ));
        assert!(matches!(prims[1], Primitive::Rect { y, filled: true, .. } if y == 12.0));
        match &prims[2] {
            Primitive::Text { x, y, content, .. } => {
                assert_eq!((*x, *y), (14.0, 28.0));
                assert_eq!(content, "car 87%");
            }
            other => panic!("expected text, got {other:?}"),
        }

        hover.enter(0);
        let prims = box_primitives(&overlay, &hover);
        assert!(matches!(prims[0], Primitive::Rect { stroke_width, .. } if stroke_width == 5.0));
    }

    #[test]
    fn test_box_primitives_without_labels() {
        let boxes = [DetectionBox::new(0.0, 0.0, 5.0, 5.0, "cat", 0.5)];
        let config = BoxOverlayConfig::new().with_show_labels(false);
        let overlay = compute_box_overlay(&boxes, 100.0, 100.0, &config, false);
        let prims = box_primitives(&overlay, &HoverTracker::new());
        assert_eq!(prims.len(), 1);
    }

    #[test]
    fn test_pose_primitives_draw_bones_first() {
        let kps = vec![PixelKeypoint(5.0, 5.0, 0.9); 17];
        let config = PoseOverlayConfig::default();
        let overlay = compute_pose_overlay(Some(kps.as_slice()), 100.0, 100.0, &config);
        let prims = pose_primitives(&overlay, &config);

        assert_eq!(prims.len(), 16 + 17);
        assert!(prims[..16].iter().all(|p| matches!(p, Primitive::Line { .. })));
        assert!(prims[16..].iter().all(|p| matches!(p, Primitive::Circle { .. })));
        assert!(matches!(
            prims[16],
            Primitive::Circle { radius, .. } if radius == config.keypoint_radius
        ));
    }

    #[test]
    fn test_primitive_json_is_tagged() {
        let json = serde_json::to_value(Primitive::Circle {
            cx: 1.0,
            cy: 2.0,
            radius: 3.0,
            color: Color::GRAY,
            opacity: 0.5,
        })
        .unwrap();
        assert_eq!(json["kind"], "circle");
        assert_eq!(json["color"], "#6b7280");
    }
}
