//! Rewind - tic-tac-toe with time travel.

use anyhow::{Context, Result};
use clap::Parser;
use rewind::{Cli, Command, RewindConfig, logging, run_replay, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RewindConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            logging::init_file_logging(&config)?;
            run_tui(&config)
        }
        Command::Replay { script, json } => {
            logging::init_stderr_logging(&config);
            info!(%script, json, "Replaying script");
            let stdout = std::io::stdout();
            run_replay(&script, json, &mut stdout.lock())
        }
    }
}
