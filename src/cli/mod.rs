// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for computing overlays from JSON files.
//!
//! This module contains the command-line interface logic, including argument parsing
//! and the `boxes` and `pose` command implementations.

// Modules
/// CLI arguments.
pub mod args;

/// Command implementations.
pub mod commands;

/// Console logging macros.
pub mod logging;
