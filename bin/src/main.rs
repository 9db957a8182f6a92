//! Stockplot CLI binary.
//!
//! Fetches adjusted closes for a list of tickers, derives daily and
//! cumulative returns, and renders them as charts.

mod cmd;
mod config;

use std::{path::PathBuf, process};

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{FetchArgs, FetchConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "stockplot")]
#[command(about = "Plot trailing stock prices and returns", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render price, daily return and cumulative return charts
    Plot {
        #[command(flatten)]
        fetch: FetchArgs,

        /// Directory the SVG charts are written to
        #[arg(short, long, default_value = "charts")]
        out_dir: PathBuf,

        /// Seed for the random line colors
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the adjusted-close table
    Prices {
        #[command(flatten)]
        fetch: FetchArgs,
    },

    /// Show return statistics per ticker
    Summary {
        #[command(flatten)]
        fetch: FetchArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    stockplot_data::load_dotenv()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let today = Utc::now().date_naive();
    match cli.command {
        Commands::Plot {
            fetch,
            out_dir,
            seed,
        } => {
            let config = FetchConfig::from_args(&fetch, today)?;
            cmd::plot::plot(&config, &out_dir, seed).await
        }
        Commands::Prices { fetch } => {
            let config = FetchConfig::from_args(&fetch, today)?;
            cmd::prices::show_prices(&config).await
        }
        Commands::Summary { fetch, format } => {
            let config = FetchConfig::from_args(&fetch, today)?;
            cmd::summary::show_summary(&config, format).await
        }
    }
}

/// Log to stderr so tables and JSON on stdout stay clean. `RUST_LOG` wins
/// over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "stockplot=debug" } else { "stockplot=info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_plot_defaults() {
        let cli = Cli::try_parse_from(["stockplot", "plot"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Plot {
                fetch,
                out_dir,
                seed,
            } => {
                assert_eq!(fetch.tickers.len(), 6);
                assert_eq!(out_dir, PathBuf::from("charts"));
                assert_eq!(seed, None);
            }
            _ => panic!("expected plot"),
        }
    }

    #[test]
    fn test_summary_json_verbose() {
        let cli =
            Cli::try_parse_from(["stockplot", "summary", "--format", "json", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Summary {
                format: OutputFormat::Json,
                ..
            }
        ));
    }
}
