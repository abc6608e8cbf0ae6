//! Update Game Data - regenerates item-mappings.json and market-list.json

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use update_game_data::{GameDataUpdater, DEFAULT_ITEMS_URL};

/// Download item names and market lists for check_prices
#[derive(Parser, Debug)]
#[command(name = "update_game_data")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory to write item-mappings.json and market-list.json into
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// URL of the TeamCraft items.json catalogue
    #[arg(long, default_value = DEFAULT_ITEMS_URL)]
    items_url: String,

    /// Universalis base URL
    #[arg(long, default_value = market_common::DEFAULT_UNIVERSALIS_URL)]
    base_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Data directory: {}", args.data_dir.display());

    let result = match GameDataUpdater::new(
        &args.items_url,
        &args.base_url,
        Duration::from_secs(args.timeout_secs),
    ) {
        Ok(updater) => updater.update(&args.data_dir).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        log::error!("Failed to update game data: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
