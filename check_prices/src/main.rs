//! Check Prices - FFXIV market board price checker
//!
//! Reads one or more item lists, looks up buying or selling prices on
//! Universalis and prints a CSV report.

use check_prices::{read_input_file, write_report, PriceResolver, UniversalisClient};
use clap::Parser;
use market_common::{ItemMappings, MarketRegistry, ITEM_MAPPINGS_FILE, MARKET_LIST_FILE};
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal};
use std::path::PathBuf;
use std::time::Duration;

/// Look up FFXIV market board prices for item lists and print a CSV report
#[derive(Parser, Debug)]
#[command(name = "check_prices")]
#[command(version, about, long_about = None)]
struct Args {
    /// Item list CSV files with rows of `name,quantity,market`
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory holding item-mappings.json and market-list.json
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

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

    if let Err(e) = run(args).await {
        log::error!("{}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> check_prices::Result<()> {
    let mappings = ItemMappings::load(&args.data_dir.join(ITEM_MAPPINGS_FILE))?;
    let registry = MarketRegistry::load(&args.data_dir.join(MARKET_LIST_FILE))?;

    let mut items = Vec::new();
    for input in &args.inputs {
        items.extend(read_input_file(input, &mappings, &registry)?);
    }
    let total = items.len();
    log::info!("Loaded {} item record(s) from {} file(s)", total, args.inputs.len());

    let client = UniversalisClient::new(&args.base_url, Duration::from_secs(args.timeout_secs))?;
    let mut resolver = PriceResolver::new(registry, client);
    for item in items {
        resolver.add(item);
    }

    resolver
        .resolve(|count| eprintln!("Loading prices [{count}/{total}]..."))
        .await?;
    let items = resolver.into_items();

    match &args.output {
        Some(path) => {
            let file = BufWriter::new(File::create(path)?);
            write_report(file, &items, true)?;
            log::info!("Report written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let bom = !stdout.is_terminal();
            write_report(stdout.lock(), &items, bom)?;
        }
    }

    Ok(())
}
