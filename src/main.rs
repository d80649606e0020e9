use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use creatordeck::config::Config;
use creatordeck::logging;
use creatordeck::store::Store;
use creatordeck::ui::{self, Route};

/// Terminal UI for an influencer-marketing campaign platform demo.
#[derive(Debug, Parser)]
#[command(name = "creatordeck", version, about)]
struct Cli {
    /// Path to the config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Route path to open at startup, e.g. "/community" or "/campaign/1".
    #[arg(long)]
    route: Option<String>,

    /// Write logs to this file (the TUI owns stdout).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let log_file = cli.log_file.or_else(|| config.logging.file.clone());
    logging::init(&config.logging.filter, log_file.as_deref())?;

    let route_path = cli
        .route
        .unwrap_or_else(|| config.ui.default_route.clone());
    let route = Route::parse(&route_path).unwrap_or_else(|| {
        tracing::warn!(path = %route_path, "unknown route, falling back to campaigns");
        Route::Campaigns
    });

    tracing::info!(?route, "starting creatordeck");
    let store = Store::seeded();
    ui::run(store, route, config.ui.tick_rate_ms)?;
    tracing::info!("exited cleanly");
    Ok(())
}
