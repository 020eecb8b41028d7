//! # Character Catalog
//!
//! Command-line entry point. Loads one page of characters, optionally pages
//! further, searches and opens one character's detail.
//!
//! ## Startup Sequence
//!
//! 1. Install logging (`RUST_LOG`, default `info`)
//! 2. Load configuration from the environment, apply CLI overrides
//! 3. Reject configurations without API keys
//! 4. Wire the HTTP adapter and signer into the controllers
//! 5. Browse until done or Ctrl+C

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use catalog_runtime::{load_config, BrowsePlan, BrowseReport, CatalogApp};
use mc_01_request_signing::RequestSigner;
use mc_04_api_client::MarvelHttpClient;

#[derive(Parser, Debug)]
#[command(name = "catalog-runtime")]
#[command(about = "Browse the Marvel character catalog from the terminal")]
struct Args {
    /// Extra pages to load after the first one
    #[arg(short, long, default_value = "0")]
    pages: u32,

    /// Case-insensitive name search applied to the loaded characters
    #[arg(short, long)]
    search: Option<String>,

    /// Open the detail screen for this row of the displayed list
    #[arg(short, long)]
    detail_index: Option<usize>,

    /// API base URL (overrides MARVEL_API_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = load_config();
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }
    config.validate()?;
    info!(base_url = %config.api.base_url, page_size = config.paging.list.page_size, "Configuration loaded");

    let api = Arc::new(
        MarvelHttpClient::new(config.api.http()).context("Failed to build HTTP client")?,
    );
    let signer = RequestSigner::with_system_clock(config.api.credentials());
    let app = CatalogApp::new(&config, api, signer);

    let plan = BrowsePlan {
        pages: args.pages,
        search: args.search,
        detail_index: args.detail_index,
    };

    tokio::select! {
        report = app.browse(&plan) => print_report(&report?),
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted, cancelling outstanding requests");
            app.unsubscribe();
        }
    }

    info!(
        list_notifications = app.observer().notifications(),
        requests_completed = app.progress().completed(),
        "Session finished"
    );
    Ok(())
}

fn print_report(report: &BrowseReport) {
    for row in &report.rows {
        println!("{:>8}  {:<40}  {}", row.id, row.name, row.image_url);
    }
    println!(
        "-- {} shown, {} loaded, cursor {}, {} extra page(s)",
        report.rows.len(),
        report.loaded,
        report.cursor,
        report.pages_loaded
    );

    if let Some(detail) = &report.detail {
        println!();
        println!("{} (#{})", detail.character.name, detail.character.id);
        println!("{}", detail.image_url);
        if !detail.character.description().is_empty() {
            println!("{}", detail.character.description());
        }
        if let Some(attribution) = detail
            .response
            .as_ref()
            .and_then(|response| response.attribution_text.as_deref())
        {
            println!("{}", attribution);
        }
    }
}
