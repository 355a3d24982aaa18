//! Guardian CLI binary.
//!
//! Sends a prompt through the configured backend and prints the answer.

use clap::Parser;
use guardian::{ObservabilityConfig, init_logging_with_config};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use cli::{Cli, Commands, run_ask};

    // Credentials may live in a .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut logging = ObservabilityConfig::new().with_json_logs(cli.json_logs);
    if cli.verbose {
        logging = logging.with_log_level("debug");
    }
    init_logging_with_config(logging)?;

    match cli.command {
        Commands::Ask(args) => run_ask(args).await?,
    }

    Ok(())
}
