// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;

use clap::Parser;

use detection_overlay::cli::args::{Cli, Commands};
use detection_overlay::cli::commands::{emit, run_boxes, run_pose};
use detection_overlay::error;

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Boxes(args) => run_boxes(args).and_then(|json| emit(&json, &args.output)),
        Commands::Pose(args) => run_pose(args).and_then(|json| emit(&json, &args.output)),
    };

    if let Err(e) = result {
        error!("{e}");
        process::exit(1);
    }
}
