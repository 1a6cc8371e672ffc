use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use matchday::config::Config;
use matchday::seed::{apply_seed, SeedFile};
use matchday::state::AppState;
use matchday_core::storage::ListQuery;

/// Matchday - Match records with a cache-aside read path
#[derive(Parser, Debug)]
#[command(name = "matchday")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON file with referees and matches to load at startup
    #[arg(long, short, env = "SEED_FILE")]
    seed: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON")]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let json_logs = cli.log_json || std::env::var("LOG_FORMAT").is_ok_and(|f| f == "json");

    // Initialize tracing subscriber
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "matchday=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    let config = Config::from_env();
    tracing::info!(
        cache_ttl_seconds = config.cache_ttl_seconds,
        event_channel_capacity = config.event_channel_capacity,
        "Starting matchday"
    );

    let state = AppState::new(&config).await?;

    if let Some(path) = &cli.seed {
        let seed = SeedFile::load(path).await?;
        apply_seed(&state, &seed).await;
    }

    let listing = state.service.list_matches(ListQuery::default()).await?;
    tracing::info!(matches = listing.len(), "Default listing ready");
    for record in &listing {
        tracing::debug!(
            match_id = record.id,
            team_a = %record.team_a,
            team_b = %record.team_b,
            scheduled_at = %record.scheduled_at,
            status = %record.status,
            "Match"
        );
    }

    shutdown_signal().await;
    state.shutdown().await;

    tracing::info!("Stopped");
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
