// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Input snapshots and the equality check used to skip recomputation.
//!
//! Two snapshots are equal iff recomputing the overlay would give the same
//! result. Scalars compare with `==` (so `NaN` never matches), the detection
//! or keypoint list compares by pointer first and then field by field, and
//! click handlers compare by pointer identity only.

use std::fmt;
use std::rc::Rc;

use crate::boxes::{BoxOverlay, compute_box_overlay};
use crate::config::{BoxOverlayConfig, PoseOverlayConfig};
use crate::geometry::{DetectionBox, PixelKeypoint};
use crate::pose::{PoseOverlay, compute_pose_overlay};

/// Host callback invoked when an interactive box is clicked.
pub type ClickHandler = Rc<dyn Fn(&DetectionBox)>;

/// Everything the box overlay depends on.
#[derive(Clone)]
pub struct BoxOverlayInputs {
    pub boxes: Rc<[DetectionBox]>,
    pub image_width: f64,
    pub image_height: f64,
    pub config: BoxOverlayConfig,
    pub on_click: Option<ClickHandler>,
}

impl BoxOverlayInputs {
    /// Create a snapshot with the default configuration and no click handler.
    #[must_use]
    pub fn new(boxes: impl Into<Rc<[DetectionBox]>>, image_width: f64, image_height: f64) -> Self {
        Self {
            boxes: boxes.into(),
            image_width,
            image_height,
            config: BoxOverlayConfig::default(),
            on_click: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: BoxOverlayConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_on_click(mut self, handler: ClickHandler) -> Self {
        self.on_click = Some(handler);
        self
    }

    /// Run the box overlay on this snapshot.
    #[must_use]
    pub fn compute(&self) -> BoxOverlay {
        compute_box_overlay(
            &self.boxes,
            self.image_width,
            self.image_height,
            &self.config,
            self.on_click.is_some(),
        )
    }

    /// Invoke the click handler, if any, for the box at `index` in the input list.
    pub fn click(&self, index: usize) {
        if let (Some(handler), Some(detection)) = (&self.on_click, self.boxes.get(index)) {
            handler(detection);
        }
    }
}

impl fmt::Debug for BoxOverlayInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxOverlayInputs")
            .field("boxes", &self.boxes)
            .field("image_width", &self.image_width)
            .field("image_height", &self.image_height)
            .field("config", &self.config)
            .field("on_click", &self.on_click.as_ref().map(|_| "Fn(&DetectionBox)"))
            .finish()
    }
}

/// Everything the pose overlay depends on.
#[derive(Debug, Clone)]
pub struct PoseOverlayInputs {
    /// Pixel-space keypoints, or `None` for no pose.
    pub keypoints: Option<Rc<[PixelKeypoint]>>,
    pub image_width: f64,
    pub image_height: f64,
    pub config: PoseOverlayConfig,
}

impl PoseOverlayInputs {
    /// Create a snapshot with the default configuration.
    #[must_use]
    pub fn new(
        keypoints: Option<impl Into<Rc<[PixelKeypoint]>>>,
        image_width: f64,
        image_height: f64,
    ) -> Self {
        Self {
            keypoints: keypoints.map(Into::into),
            image_width,
            image_height,
            config: PoseOverlayConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: PoseOverlayConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the pose overlay on this snapshot.
    #[must_use]
    pub fn compute(&self) -> PoseOverlay {
        compute_pose_overlay(
            self.keypoints.as_deref(),
            self.image_width,
            self.image_height,
            &self.config,
        )
    }
}

/// A snapshot of either overlay kind.
#[derive(Debug, Clone)]
pub enum OverlayInputs {
    Boxes(BoxOverlayInputs),
    Pose(PoseOverlayInputs),
}

fn same_box(a: &DetectionBox, b: &DetectionBox) -> bool {
    a.x == b.x
        && a.y == b.y
        && a.width == b.width
        && a.height == b.height
        && a.label == b.label
        && a.confidence == b.confidence
        && a.color == b.color
}

fn same_keypoint(a: &PixelKeypoint, b: &PixelKeypoint) -> bool {
    a.x() == b.x() && a.y() == b.y() && a.confidence() == b.confidence()
}

fn same_list<T>(prev: &Rc<[T]>, next: &Rc<[T]>, same: impl Fn(&T, &T) -> bool) -> bool {
    if Rc::ptr_eq(prev, next) {
        return true;
    }
    prev.len() == next.len() && prev.iter().zip(next.iter()).all(|(a, b)| same(a, b))
}

fn same_handler(prev: Option<&ClickHandler>, next: Option<&ClickHandler>) -> bool {
    match (prev, next) {
        (None, None) => true,
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

/// Whether two box snapshots would produce the same overlay.
#[must_use]
pub fn box_inputs_equal(prev: &BoxOverlayInputs, next: &BoxOverlayInputs) -> bool {
    prev.image_width == next.image_width
        && prev.image_height == next.image_height
        && prev.config.min_confidence == next.config.min_confidence
        && prev.config.show_labels == next.config.show_labels
        && prev.config.show_confidence == next.config.show_confidence
        && same_handler(prev.on_click.as_ref(), next.on_click.as_ref())
        && same_list(&prev.boxes, &next.boxes, same_box)
}

/// Whether two pose snapshots would produce the same overlay.
#[must_use]
pub fn pose_inputs_equal(prev: &PoseOverlayInputs, next: &PoseOverlayInputs) -> bool {
    let (a, b) = (&prev.config, &next.config);
    let scalars_equal = prev.image_width == next.image_width
        && prev.image_height == next.image_height
        && a.min_confidence == b.min_confidence
        && a.visible == b.visible
        && a.keypoint_radius == b.keypoint_radius
        && a.line_width == b.line_width
        && a.show_keypoints == b.show_keypoints
        && a.show_connections == b.show_connections;
    if !scalars_equal {
        return false;
    }

    match (&prev.keypoints, &next.keypoints) {
        (None, None) => true,
        (Some(p), Some(n)) => same_list(p, n, same_keypoint),
        _ => false,
    }
}

/// Whether two snapshots would produce the same overlay.
///
/// Snapshots of different overlay kinds are never equal.
#[must_use]
pub fn overlay_inputs_equal(prev: &OverlayInputs, next: &OverlayInputs) -> bool {
    match (prev, next) {
        (OverlayInputs::Boxes(p), OverlayInputs::Boxes(n)) => box_inputs_equal(p, n),
        (OverlayInputs::Pose(p), OverlayInputs::Pose(n)) => pose_inputs_equal(p, n),
        _ => false,
    }
}
