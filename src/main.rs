//! Tunescout - track search with rating and lyrics enrichment.
//!
//! Looks up tracks for a free-text term on the primary search API, keeps one
//! result per distinct track name, and enriches each with a popularity
//! rating from the secondary API. Lyrics are fetched per track, on demand.

pub mod alert;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod ratings;
pub mod search;
#[cfg(test)]
pub mod test_utils;
pub mod traits;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("tunescout=info".parse().unwrap()))
        .init();

    cli::run_command(&args)
}
