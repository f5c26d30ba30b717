use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::logging::{self, LogLevel};
use grid_snake::modes::PlayMode;
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a 20x20 grid, steered with the arrow keys")]
struct Cli {
    /// File that receives log output
    #[arg(long, default_value = "grid_snake.log")]
    log_file: PathBuf,

    /// Log verbosity
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_file, cli.log_level)?;

    let config = GameConfig::default();
    info!(
        "starting with config {}",
        serde_json::to_string(&config).context("Failed to serialize config")?
    );

    let mut play_mode = PlayMode::new(config)?;
    play_mode.run().await?;

    info!("exited cleanly");
    Ok(())
}
