// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Number of keypoints in the COCO pose layout.
pub const NUM_KEYPOINTS: usize = 17;

/// COCO keypoint names, in index order.
pub const KEYPOINT_NAMES: [&str; NUM_KEYPOINTS] = [
    "nose",
    "left_eye",
    "right_eye",
    "left_ear",
    "right_ear",
    "left_shoulder",
    "right_shoulder",
    "left_elbow",
    "right_elbow",
    "left_wrist",
    "right_wrist",
    "left_hip",
    "right_hip",
    "left_knee",
    "right_knee",
    "left_ankle",
    "right_ankle",
];

/// COCO-Pose skeleton structure (pairs of keypoint indices, `[from, to]`).
/// Output connections always follow this order.
pub const SKELETON: [[usize; 2]; 16] = [
    // head
    [0, 1], // nose to left eye
    [0, 2], // nose to right eye
    [1, 3], // left eye to left ear
    [2, 4], // right eye to right ear
    // torso
    [5, 6],   // left shoulder to right shoulder
    [5, 11],  // left shoulder to left hip
    [6, 12],  // right shoulder to right hip
    [11, 12], // left hip to right hip
    // arms
    [5, 7],  // left shoulder to left elbow
    [7, 9],  // left elbow to left wrist
    [6, 8],  // right shoulder to right elbow
    [8, 10], // right elbow to right wrist
    // legs
    [11, 13], // left hip to left knee
    [13, 15], // left knee to left ankle
    [12, 14], // right hip to right knee
    [14, 16], // right knee to right ankle
];

/// Anatomical grouping used to pick keypoint and bone colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyPart {
    /// Display color for this body part.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Head => Color(0xfb, 0xbf, 0x24),     // #fbbf24
            Self::Torso => Color(0xa8, 0x55, 0xf7),    // #a855f7
            Self::LeftArm => Color(0x22, 0xc5, 0x5e),  // #22c55e
            Self::RightArm => Color(0x06, 0xb6, 0xd4), // #06b6d4
            Self::LeftLeg => Color(0xf9, 0x73, 0x16),  // #f97316
            Self::RightLeg => Color(0xec, 0x48, 0x99), // #ec4899
        }
    }

    /// Body part of the keypoint at `index`, or `None` past the COCO layout.
    #[must_use]
    pub fn of_keypoint(index: usize) -> Option<Self> {
        KEYPOINT_BODY_PARTS.get(index).copied()
    }
}

/// Body part of each keypoint, in index order.
pub const KEYPOINT_BODY_PARTS: [BodyPart; NUM_KEYPOINTS] = [
    BodyPart::Head,     // nose
    BodyPart::Head,     // left_eye
    BodyPart::Head,     // right_eye
    BodyPart::Head,     // left_ear
    BodyPart::Head,     // right_ear
    BodyPart::Torso,    // left_shoulder
    BodyPart::Torso,    // right_shoulder
    BodyPart::LeftArm,  // left_elbow
    BodyPart::RightArm, // right_elbow
    BodyPart::LeftArm,  // left_wrist
    BodyPart::RightArm, // right_wrist
    BodyPart::Torso,    // left_hip
    BodyPart::Torso,    // right_hip
    BodyPart::LeftLeg,  // left_knee
    BodyPart::RightLeg, // right_knee
    BodyPart::LeftLeg,  // left_ankle
    BodyPart::RightLeg, // right_ankle
];

/// Color of the bone between two body parts.
///
/// Same part on both ends uses that part's color. A bone attached to the
/// torso takes the limb's color. Any other mix takes the `from` end's color,
/// so the result depends on connection direction.
#[must_use]
pub const fn connection_color(from: BodyPart, to: BodyPart) -> Color {
    match (from, to) {
        (BodyPart::Torso, other) | (other, BodyPart::Torso) => other.color(),
        (from, _) => from.color(),
    }
}
