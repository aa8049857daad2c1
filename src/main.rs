//! Route-table synchronizer daemon.
//!
//! Keeps a gateway's route table in sync with a remote routes document:
//!
//! ```text
//!                ┌────────────────────────────────────────────────┐
//!                │              ROUTE-SYNC CONTROL PLANE          │
//!                │                                                │
//!  routes.json   │  ┌───────────┐   ┌────────┐   ┌─────────────┐  │
//!  (HTTP source)─┼─▶│  fetch    │──▶│ routes │──▶│    sync     │  │
//!                │  │ (bounded) │   │ parser │   │ atomic swap │  │
//!                │  └───────────┘   └────────┘   └──────┬──────┘  │
//!                │        ▲                             │         │
//!                │  ┌─────┴─────┐                ┌──────▼──────┐  │
//!                │  │ scheduler │                │  published  │  │
//!                │  │  (ticker) │                │ route table │──┼─▶ dispatch
//!                │  └───────────┘                └─────────────┘  │   engine
//!                └────────────────────────────────────────────────┘
//! ```
//!
//! A failed fetch or parse keeps the previous table published; traffic
//! keeps routing on stale-but-correct rules.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use url::Url;

use route_sync::config::{load_config, SyncConfig};
use route_sync::fetch::HttpFetcher;
use route_sync::lifecycle::shutdown_signal;
use route_sync::observability::{logging, metrics};
use route_sync::scheduler::RefreshScheduler;
use route_sync::sync::RouteTableSynchronizer;

#[derive(Parser)]
#[command(name = "route-sync")]
#[command(about = "Route-table synchronizer for a gateway control plane", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SyncConfig::default(),
    };

    logging::init(&config.observability.log_level);

    tracing::info!("route-sync v0.1.0 starting");
    tracing::info!(
        source = %config.source.url,
        interval_ms = config.refresh.interval_ms,
        timeout_ms = config.fetch.timeout_ms,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let source = Url::parse(&config.source.url)?;
    let fetcher = Arc::new(HttpFetcher::new(config.fetch.timeout())?);
    let synchronizer = Arc::new(RouteTableSynchronizer::new(fetcher, source));

    let mut notices = synchronizer.subscribe();
    tokio::spawn(async move {
        while let Ok(notice) = notices.recv().await {
            tracing::debug!(
                success = notice.success,
                version = notice.version,
                changed = notice.changed,
                "Refresh attempt completed"
            );
        }
    });

    let scheduler = RefreshScheduler::new(synchronizer.clone());
    scheduler.start(config.refresh.interval())?;

    shutdown_signal().await?;
    tracing::info!("Shutdown signal received");

    scheduler.stop().await;

    let table = synchronizer.current_table();
    tracing::info!(routes = table.len(), version = table.version(), "Shutdown complete");
    Ok(())
}
