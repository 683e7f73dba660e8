//! Nuvio CLI
//!
//! Classifies stream lists and resolves episodes against catalog dumps,
//! printing JSON to stdout. Logs go to stderr.

mod commands;

use clap::Parser;
use nuvio_core::config::AppConfig;
use nuvio_core::NuvioError;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nuvio")]
#[command(about = "Stream classification and episode lookup for the Nuvio player")]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let loaded = AppConfig::load();
    let (config, load_error) = config_or_default(loaded);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.general.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = load_error {
        tracing::warn!(
            path = %AppConfig::config_path().display(),
            "Failed to load config, using defaults: {e}"
        );
    }

    let output = commands::handle_command(cli.command, &config)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// A broken user config must not lock the user out of the CLI.
fn config_or_default(loaded: Result<AppConfig, NuvioError>) -> (AppConfig, Option<NuvioError>) {
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}
