//! Command-line interface for tunescout.
//!
//! This module provides the CLI trigger around the aggregation pipeline:
//! search for tracks, fetch lyrics, and store the secondary API key.

mod commands;

pub use commands::{Cli, Commands, run_command};
