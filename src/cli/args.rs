// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{
    DEFAULT_BOX_MIN_CONFIDENCE, DEFAULT_KEYPOINT_RADIUS, DEFAULT_LINE_WIDTH,
    DEFAULT_POSE_MIN_CONFIDENCE,
};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Examples:
    detection-overlay boxes --input detections.json --width 1920 --height 1080
    detection-overlay boxes -i detections.json --image frame.jpg --conf 0.8 --primitives
    detection-overlay pose --input keypoints.json --width 640 --height 480 --conf 0.5
    detection-overlay pose -i keypoints.json --image frame.jpg --normalized -o pose.json"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter and style detection boxes
    Boxes(BoxesArgs),
    /// Filter pose keypoints and build the skeleton
    Pose(PoseArgs),
}

/// Image size, given directly or read from an image file.
#[derive(Args, Debug, Clone)]
pub struct ImageSizeArgs {
    /// Image width in pixels
    #[arg(long, requires = "height", conflicts_with = "image")]
    pub width: Option<f64>,

    /// Image height in pixels
    #[arg(long, requires = "width", conflicts_with = "image")]
    pub height: Option<f64>,

    /// Image file to read the width and height from
    #[arg(long)]
    pub image: Option<PathBuf>,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Emit drawable primitives instead of the overlay
    #[arg(long, default_value_t = false)]
    pub primitives: bool,

    /// Write JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show verbose output
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

/// Arguments for the boxes command.
#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct BoxesArgs {
    /// JSON file with an array of detection boxes
    #[arg(short, long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub size: ImageSizeArgs,

    /// Minimum box confidence (inclusive)
    #[arg(long, default_value_t = DEFAULT_BOX_MIN_CONFIDENCE)]
    pub conf: f64,

    /// Do not compute label badges
    #[arg(long, default_value_t = false)]
    pub no_labels: bool,

    /// Leave the confidence out of label badges
    #[arg(long, default_value_t = false)]
    pub no_confidence: bool,

    /// Mark boxes as clickable
    #[arg(long, default_value_t = false)]
    pub interactive: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the pose command.
#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct PoseArgs {
    /// JSON file with 17 keypoints as [x, y, confidence] triples, or null
    #[arg(short, long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub size: ImageSizeArgs,

    /// Minimum keypoint confidence (inclusive)
    #[arg(long, default_value_t = DEFAULT_POSE_MIN_CONFIDENCE)]
    pub conf: f64,

    /// Input holds {x, y, confidence} objects in [0, 1] image space
    #[arg(long, default_value_t = false)]
    pub normalized: bool,

    /// Do not emit keypoints
    #[arg(long, default_value_t = false)]
    pub no_keypoints: bool,

    /// Do not emit skeleton bones
    #[arg(long, default_value_t = false)]
    pub no_connections: bool,

    /// Keypoint radius in pixels
    #[arg(long, default_value_t = DEFAULT_KEYPOINT_RADIUS)]
    pub radius: f64,

    /// Bone line width in pixels
    #[arg(long, default_value_t = DEFAULT_LINE_WIDTH)]
    pub line_width: f64,

    #[command(flatten)]
    pub output: OutputArgs,
}
