//! storyrake main entry point
//!
//! This is the command-line interface for the storyrake forum scraper.

use clap::Parser;
use std::path::PathBuf;
use storyrake::config::{load_config_with_hash, Config};
use storyrake::harvest::{self, Mode};
use tracing_subscriber::EnvFilter;

/// storyrake: a forum story and comment scraper
///
/// Fetches paginated listing pages and every story's detail page, attaches
/// the comments, and reports aggregate scraping throughput.
#[derive(Parser, Debug)]
#[command(name = "storyrake")]
#[command(version = "0.1.0")]
#[command(about = "Scrape forum stories and comments", long_about = None)]
struct Cli {
    /// Use a pool of parallel workers for fetching stories
    #[arg(long)]
    multithreaded: bool,

    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, or fall back to the built-in defaults
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    let mode = if cli.multithreaded {
        Mode::Pooled
    } else {
        Mode::SingleWorker
    };

    harvest::run(config, mode)?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("storyrake=info,warn"),
            1 => EnvFilter::new("storyrake=debug,info"),
            2 => EnvFilter::new("storyrake=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
