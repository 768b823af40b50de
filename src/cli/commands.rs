// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::cli::args::{BoxesArgs, ImageSizeArgs, OutputArgs, PoseArgs};
use crate::cli::logging::set_verbose;
use crate::config::{BoxOverlayConfig, PoseOverlayConfig};
use crate::error::{OverlayError, Result};
use crate::geometry::{DetectionBox, Keypoint, PixelKeypoint, to_pixel_keypoints, validate_keypoints};
use crate::hover::HoverTracker;
use crate::pose::compute_pose_overlay;
use crate::render::{box_primitives, pose_primitives};
use crate::visualizer::NUM_KEYPOINTS;
use crate::{compute_box_overlay, section, success, verbose, warn};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| {
        OverlayError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {e}", path.display()),
        ))
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Resolve the image size from explicit dimensions or an image file header.
///
/// # Errors
///
/// Returns an error if neither source is given or the image cannot be read.
pub fn resolve_image_size(size: &ImageSizeArgs) -> Result<(f64, f64)> {
    if let (Some(width), Some(height)) = (size.width, size.height) {
        return Ok((width, height));
    }

    match &size.image {
        #[cfg(feature = "image")]
        Some(path) => {
            let (width, height) = image::image_dimensions(path)?;
            Ok((f64::from(width), f64::from(height)))
        }
        #[cfg(not(feature = "image"))]
        Some(_) => Err(OverlayError::ConfigError(
            "reading image dimensions requires the `image` feature".to_string(),
        )),
        None => Err(OverlayError::ConfigError(
            "image size required: pass --width and --height, or --image".to_string(),
        )),
    }
}

/// Run the boxes command and return the JSON document to emit.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the options are invalid.
pub fn run_boxes(args: &BoxesArgs) -> Result<String> {
    set_verbose(args.output.verbose);
    section!("Box overlay");

    let config = BoxOverlayConfig::new()
        .with_min_confidence(args.conf)
        .with_show_labels(!args.no_labels)
        .with_show_confidence(!args.no_confidence);
    config.validate()?;

    let (width, height) = resolve_image_size(&args.size)?;
    let boxes: Vec<DetectionBox> = read_json(&args.input)?;
    verbose!(
        "Loaded {} boxes from {} ({width}x{height})",
        boxes.len(),
        args.input.display()
    );

    let overlay = compute_box_overlay(&boxes, width, height, &config, args.interactive);
    verbose!(
        "{} of {} boxes at confidence >= {}",
        overlay.len(),
        boxes.len(),
        config.min_confidence
    );
    if overlay.is_empty() {
        warn!("Nothing to render for {}", args.input.display());
    }

    let json = if args.output.primitives {
        let mut hover = HoverTracker::new();
        hover.sync(&overlay);
        serde_json::to_string_pretty(&box_primitives(&overlay, &hover))?
    } else {
        serde_json::to_string_pretty(&overlay)?
    };
    Ok(json)
}

fn load_keypoints(args: &PoseArgs, width: f64, height: f64) -> Result<Option<Vec<PixelKeypoint>>> {
    if args.normalized {
        let keypoints: Option<Vec<Keypoint>> = read_json(&args.input)?;
        return Ok(keypoints.map(|kps| to_pixel_keypoints(&kps, width, height)));
    }

    let rows: Option<Vec<Vec<f64>>> = read_json(&args.input)?;
    rows.map(|rows| validate_keypoints(&rows)).transpose()
}

/// Run the pose command and return the JSON document to emit.
///
/// # Errors
///
/// Returns an error if the input cannot be read, a keypoint is not an
/// `[x, y, confidence]` triple, or the options are invalid.
pub fn run_pose(args: &PoseArgs) -> Result<String> {
    set_verbose(args.output.verbose);
    section!("Pose overlay");

    let config = PoseOverlayConfig::new()
        .with_min_confidence(args.conf)
        .with_show_keypoints(!args.no_keypoints)
        .with_show_connections(!args.no_connections)
        .with_keypoint_radius(args.radius)
        .with_line_width(args.line_width);
    config.validate()?;

    let (width, height) = resolve_image_size(&args.size)?;
    let keypoints = load_keypoints(args, width, height)?;

    match keypoints.as_deref() {
        None | Some([]) => verbose!("No pose data in {}", args.input.display()),
        Some(kps) if kps.len() != NUM_KEYPOINTS => warn!(
            "Expected {NUM_KEYPOINTS} keypoints, got {}; missing ones are treated as invalid",
            kps.len()
        ),
        Some(kps) => verbose!("Loaded {} keypoints from {}", kps.len(), args.input.display()),
    }

    let overlay = compute_pose_overlay(keypoints.as_deref(), width, height, &config);
    verbose!(
        "{} bones, {} keypoints at confidence >= {}",
        overlay.connections.len(),
        overlay.keypoints.len(),
        config.min_confidence
    );

    let json = if args.output.primitives {
        serde_json::to_string_pretty(&pose_primitives(&overlay, &config))?
    } else {
        serde_json::to_string_pretty(&overlay)?
    };
    Ok(json)
}

/// Write a JSON document to the requested destination.
///
/// # Errors
///
/// Returns an error if the output file cannot be written.
pub fn emit(json: &str, output: &OutputArgs) -> Result<()> {
    match &output.output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))?;
            success!("Saved to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
