//! Monitor Status CLI
//!
//! Print the current alert state of a monitor, looked up by name.

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use monitor_status::config::{Config, Credentials};
use monitor_status::lookup::run;

/// Look up a monitor by name and print its current status
///
/// Reads the API key from API_KEY and the application key from APP_KEY.
#[derive(Debug, Parser)]
#[command(name = "monitor-status")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Exact display name of the monitor
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    name: String,

    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the monitoring API (overrides the config file)
    #[arg(long)]
    api_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs as JSON
    #[arg(long)]
    json: bool,
}

fn setup_logging(verbose: bool, json: bool) {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Logs go to stderr; stdout carries only the report
    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Load the config file if given, then apply command-line overrides
fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    Ok(match &cli.api_url {
        Some(api_url) => config.with_api_url(api_url),
        None => config,
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.json);

    let credentials = Credentials::from_env().context("Missing monitoring API credentials")?;
    let config = load_config(&cli)?;

    tracing::debug!(
        api_url = %config.api_url,
        timeout = ?config.timeout,
        monitor = %cli.name,
        "Looking up monitor"
    );

    let client = config
        .build_client()
        .context("Failed to create monitoring API client")?;

    let report = run(&client, &credentials, &cli.name).await;
    for line in report.lines() {
        println!("{line}");
    }

    Ok(())
}
