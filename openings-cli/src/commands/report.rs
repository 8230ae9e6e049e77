//! Report command - one-shot or polled opening report.

use anyhow::Result;
use clap::{Args, ValueEnum};
use tokio::time::{Duration, sleep};
use tracing::info;

use openings_core::render_grouped;
use openings_fetch::LichessClient;
use openings_sources::{collect_games, resolve};

use crate::Cli;

/// Arguments for the report command.
#[derive(Args, Default)]
pub struct ReportArgs {
    /// Seconds between polls (0 for a single run).
    #[arg(long, default_value = "0")]
    pub poll_interval: u64,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable grouped text.
    #[default]
    Text,
    /// The raw live-game list as JSON, for scripting.
    Json,
}

/// Runs the report command.
///
/// A fetch failure ends the loop with an error; the binary exits nonzero
/// and the error line names the URL that failed.
pub async fn run(args: &ReportArgs, cli: &Cli) -> Result<()> {
    let client = LichessClient::new();
    let mode = cli.source.into();

    loop {
        let resolved = resolve(&client, mode, cli.limit).await?;
        let games = collect_games(&client, &resolved).await?;

        match args.format {
            OutputFormat::Text => println!("{}", render_grouped(&games)),
            OutputFormat::Json if args.pretty => {
                println!("{}", serde_json::to_string_pretty(&games)?);
            }
            OutputFormat::Json => println!("{}", serde_json::to_string(&games)?),
        }

        if args.poll_interval == 0 {
            break;
        }
        info!(seconds = args.poll_interval, "sleeping until next poll");
        sleep(Duration::from_secs(args.poll_interval)).await;
    }
    Ok(())
}
