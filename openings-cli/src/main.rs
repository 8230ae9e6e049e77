// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! chess-openings-live CLI - live Lichess games grouped by opening.
//!
//! # Examples
//!
//! ```bash
//! # One-shot text report from the default (auto) source
//! openings-live
//!
//! # Poll every 60 seconds
//! openings-live report --poll-interval 60
//!
//! # JSON output, broadcast source only
//! openings-live --source broadcast report --format json --pretty
//!
//! # Inspect at most three TV channels
//! openings-live --limit 3
//!
//! # Web view on port 8000
//! openings-live serve
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use openings_sources::SourceMode;

use commands::{report, serve};

// ============================================================================
// CLI Definition
// ============================================================================

/// chess-openings-live - live Lichess games grouped by opening.
#[derive(Parser)]
#[command(name = "openings-live")]
#[command(about = "Poll Lichess for live games and group them by opening")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs a one-shot 'report'.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data source for live games.
    #[arg(long, default_value = "auto", global = true)]
    pub source: SourceArg,

    /// Limit the number of TV channels / broadcast rounds to inspect.
    #[arg(long, global = true)]
    pub limit: Option<usize>,

    /// Verbose output (debug logging, echoes raw Lichess payloads).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (no logging).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print live games grouped by opening (default).
    #[command(visible_alias = "r")]
    Report(report::ReportArgs),

    /// Serve the grouped openings over HTTP (JSON + HTML view).
    #[command(visible_alias = "s")]
    Serve(serve::ServeArgs),
}

/// Discovery source options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum SourceArg {
    /// Live TV channels only.
    Tv,
    /// Broadcast tournament rounds only.
    Broadcast,
    /// TV first, broadcasts when TV has nothing.
    #[default]
    Auto,
}

impl From<SourceArg> for SourceMode {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Tv => SourceMode::Tv,
            SourceArg::Broadcast => SourceMode::Broadcast,
            SourceArg::Auto => SourceMode::Auto,
        }
    }
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match &cli.command {
        Some(Commands::Report(args)) => report::run(args, &cli).await,
        Some(Commands::Serve(args)) => serve::run(args, &cli).await,
        None => report::run(&report::ReportArgs::default(), &cli).await,
    }
}
