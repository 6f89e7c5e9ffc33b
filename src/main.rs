use anyhow::Result;
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

mod aggregator;
mod config;
mod display;
mod models;
mod parsers;
mod scrapers;
mod storage;
mod utils;

use crate::config::Config;
use crate::scrapers::registry;

#[derive(Debug, Parser)]
#[command(name = "price-monitor", about = "Monitor fitness equipment prices")]
struct Args {
    /// Use sample data instead of scraping
    #[arg(long)]
    sample: bool,

    /// Sample/cache snapshot to load
    #[arg(long, default_value = "sample_products.json")]
    sample_file: PathBuf,

    /// Where to save this run's results
    #[arg(long, default_value = "products.json")]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("price_monitor=info".parse()?),
        )
        .init();

    let args = Args::parse();

    info!("Starting Product Price Monitor");

    if args.sample {
        info!("Loading sample data instead of scraping...");
        let records = storage::load(&args.sample_file)?;
        display::render_table(&records);
        return Ok(());
    }

    let config = Arc::new(Config::load()?);
    let client = utils::http::create_client(&config.user_agent)?;
    let scrapers = registry(&config);

    info!("--- Run started at {} ---", Local::now().format("%Y-%m-%d %H:%M:%S"));

    let catalog = aggregator::collect(&scrapers, &client).await;

    let records = if catalog.is_empty() {
        warn!("No products were scraped (likely due to bot protection).");
        if args.sample_file.exists() {
            info!("Falling back to cached snapshot {}", args.sample_file.display());
            storage::load(&args.sample_file)?
        } else {
            warn!(
                "No fallback snapshot at {}; provide one or rerun with --sample",
                args.sample_file.display()
            );
            Vec::new()
        }
    } else {
        catalog.records.clone()
    };

    display::render_table(&records);
    display::render_diagnostics(&catalog);

    if !records.is_empty() {
        storage::save(&args.out, &records)?;
    }

    Ok(())
}
